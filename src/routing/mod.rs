//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Announcement ("R1 10.1.0.0/16 20"):
//!     addr.rs (dotted quad → prefix bits)
//!     → trie.rs insert (walk bits, attach route at depth = prefix length)
//!
//! Lookup ("10.1.2.3"):
//!     addr.rs (full 32-bit path)
//!     → trie.rs lookup (walk path, keep the cheapest-or-latest route seen)
//! ```
//!
//! # Design Decisions
//! - Costs beat specificity: a cheaper shallow route outranks a deeper,
//!   more expensive match; ties go to the deeper node
//! - Announcements are immutable records, superseded rather than edited
//! - The table is an explicit object passed to callers, not global state

pub mod addr;
pub mod route;
pub mod trie;

pub use route::Route;
pub use trie::RouteTable;
