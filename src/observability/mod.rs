//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging only; every request and dropped connection is
//!   visible through tracing fields, not bespoke counters

pub mod logging;
