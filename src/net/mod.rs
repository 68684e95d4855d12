//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (bind, accept)
//!     → connection.rs (connection id, timed single read)
//!     → server.rs (dispatch request, write response, close)
//!
//! One connection is processed fully before the next accept; the route
//! table needs no synchronization because of it.
//! ```
//!
//! # Design Decisions
//! - One request/response exchange per connection, then close
//! - Request errors close the connection silently (no error responses)
//! - Blocking (the timed receive) lives only in this layer

pub mod connection;
pub mod listener;
pub mod server;
