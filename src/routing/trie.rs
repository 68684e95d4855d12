//! Binary prefix trie holding the route table.
//!
//! # Responsibilities
//! - Attach announcements at the node addressed by their prefix bits
//! - Resolve conflicting announcements for the same prefix
//! - Select the winning route for a lookup path
//!
//! # Design Decisions
//! - Children are exclusively owned by their parent; no arena, no
//!   shared references
//! - Nodes are created lazily and never removed (no withdrawal)
//! - The root always owns a catch-all route, so lookups are total
//! - Costs beat specificity: a visited route supersedes the current best
//!   only when its cost is less than or equal, so a strictly cheaper
//!   shallow route survives deeper, more specific matches, and equal
//!   costs favor the deeper node. This is the table's contract, not
//!   longest-prefix-match.

use crate::routing::addr::PrefixBits;
use crate::routing::route::Route;

/// One trie node. Depth equals the number of bits consumed to reach it.
#[derive(Debug, Default)]
struct Node {
    zero: Option<Box<Node>>,
    one: Option<Box<Node>>,
    route: Option<Route>,
}

impl Node {
    fn child(&self, bit: bool) -> Option<&Node> {
        let slot = if bit { &self.one } else { &self.zero };
        slot.as_deref()
    }

    fn child_or_insert(&mut self, bit: bool) -> &mut Node {
        let slot = if bit { &mut self.one } else { &mut self.zero };
        slot.get_or_insert_with(Box::default)
    }
}

/// Route table backed by a binary trie over address bits.
#[derive(Debug)]
pub struct RouteTable {
    root: Node,
    catch_all: Route,
}

impl RouteTable {
    /// Build a table whose root owns the given catch-all route.
    pub fn new(catch_all: Route) -> Self {
        let root = Node {
            route: Some(catch_all.clone()),
            ..Node::default()
        };
        Self { root, catch_all }
    }

    /// Attach a route at the node addressed by its prefix bits.
    ///
    /// Nodes are created lazily along the path. An existing route at the
    /// target node is replaced when its cost is greater than or equal to
    /// the incoming cost: ties go to the most recent announcement, and
    /// only a strictly cheaper existing route is kept.
    pub fn insert(&mut self, route: Route) {
        let prefix = PrefixBits::from_network(route.network, route.prefix_len);
        let mut node = &mut self.root;
        for bit in prefix.iter() {
            node = node.child_or_insert(bit);
        }
        match &node.route {
            Some(existing) if existing.cost < route.cost => {}
            _ => node.route = Some(route),
        }
    }

    /// Walk the path and return the best route seen along it.
    ///
    /// Descent stops as soon as the next required child is absent or the
    /// path is consumed. Every visited node that owns a route updates the
    /// running best under the cost-first rule described in the module doc.
    pub fn lookup(&self, path: PrefixBits) -> &Route {
        let mut node = &self.root;
        let mut best = self
            .root
            .route
            .as_ref()
            .expect("root always carries the catch-all");
        for bit in path.iter() {
            match node.child(bit) {
                Some(next) => node = next,
                None => break,
            }
            if let Some(route) = &node.route {
                if route.cost <= best.cost {
                    best = route;
                }
            }
        }
        best
    }

    /// Reset to a single fresh root holding the catch-all route.
    ///
    /// Not reachable from the protocol surface, but part of the table's
    /// contract.
    pub fn clear(&mut self) {
        self.root = Node {
            route: Some(self.catch_all.clone()),
            ..Node::default()
        };
    }
}
