//! Route table server library.

pub mod config;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod proto;
pub mod routing;

pub use config::ServerConfig;
pub use lifecycle::shutdown::Shutdown;
pub use net::server::RouteServer;
