//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// bind_address is not a parseable socket address.
    BindAddress(String),
    /// A numeric setting that must be positive was zero.
    NotPositive(&'static str),
    /// The catch-all router id is empty.
    EmptyDefaultRouterId,
    /// log_level is not one of trace/debug/info/warn/error.
    LogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::BindAddress(addr) => {
                write!(f, "listener.bind_address {:?} is not a socket address", addr)
            }
            ValidationError::NotPositive(field) => write!(f, "{} must be positive", field),
            ValidationError::EmptyDefaultRouterId => {
                write!(f, "routing.default_router_id must not be empty")
            }
            ValidationError::LogLevel(level) => {
                write!(f, "observability.log_level {:?} is not a known level", level)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a deserialized configuration for semantic problems.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.timeouts.recv_secs == 0 {
        errors.push(ValidationError::NotPositive("timeouts.recv_secs"));
    }
    if config.routing.default_router_id.is_empty() {
        errors.push(ValidationError::EmptyDefaultRouterId);
    }
    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
