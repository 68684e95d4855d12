//! Route announcement record.

use std::fmt;
use std::net::Ipv4Addr;

/// A single announced route: who announced it, for which network, at
/// what cost.
///
/// Routes are immutable once created. A conflicting announcement for the
/// same prefix replaces the record wholesale; nothing is edited in place
/// (see the trie's insertion policy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Identifier of the announcing router.
    pub router_id: String,

    /// Network address with host bits zeroed.
    pub network: Ipv4Addr,

    /// Number of significant leading bits (0-32).
    pub prefix_len: u8,

    /// Metric used to rank competing routes; lower is preferred.
    pub cost: u32,
}

impl Route {
    pub fn new(router_id: impl Into<String>, network: Ipv4Addr, prefix_len: u8, cost: u32) -> Self {
        Self {
            router_id: router_id.into(),
            network,
            prefix_len,
            cost,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{} cost {}",
            self.router_id, self.network, self.prefix_len, self.cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_cidr_and_cost() {
        let route = Route::new("R1", Ipv4Addr::new(10, 0, 0, 0), 24, 10);
        assert_eq!(route.to_string(), "R1 10.0.0.0/24 cost 10");
    }
}
