//! Protocol subsystem.
//!
//! # Data Flow
//! ```text
//! Raw request text
//!     → dispatcher.rs (CRLF framing: command line + body lines)
//!     → UPDATE: parse each route line → table.insert() in body order
//!     → QUERY: parse the address → table.lookup()
//!     → Build response text (ACK / RESULT / verbatim echo)
//! ```
//!
//! # Design Decisions
//! - Stateless across requests; all request state lives on the stack
//! - Unknown commands echo the request back rather than erroring
//! - A malformed line aborts the request but keeps earlier inserts

pub mod dispatcher;

pub use dispatcher::{Dispatcher, ProtocolError};
