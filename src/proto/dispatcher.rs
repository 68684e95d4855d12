//! Request dispatch and response building.
//!
//! # Responsibilities
//! - Split a raw request into command and body lines
//! - Drive the route table (UPDATE inserts, QUERY lookups)
//! - Build the response text
//!
//! # Design Decisions
//! - Requests and responses share one CRLF delimiter
//! - The final two split segments (terminator marker and empty tail) are
//!   not part of the body
//! - UPDATE is not atomic: a malformed line fails the request, but lines
//!   before it stay inserted

use thiserror::Error;

use crate::routing::addr::{self, AddressError};
use crate::routing::route::Route;
use crate::routing::trie::RouteTable;

/// Line delimiter for requests and responses.
pub const DELIMITER: &str = "\r\n";

const CMD_UPDATE: &str = "UPDATE";
const CMD_QUERY: &str = "QUERY";

/// Errors raised while handling a single request.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// An address or prefix in the request failed to parse.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// An UPDATE body line did not have the
    /// `<routerId> <network>/<prefixLength> <cost>` shape.
    #[error("malformed route line {0:?}")]
    MalformedRouteLine(String),

    /// The body was shorter than the command requires.
    #[error("{0} request has no body line")]
    MissingBody(&'static str),
}

/// Stateless request handler.
///
/// One dispatcher serves every connection; per-request state lives on
/// the stack. UPDATE mutates the table, QUERY reads it, anything else is
/// echoed back verbatim.
#[derive(Debug, Default)]
pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Handle one request and build its response text.
    pub fn dispatch(&self, raw: &str, table: &mut RouteTable) -> Result<String, ProtocolError> {
        let segments: Vec<&str> = raw.split(DELIMITER).collect();
        // split always yields at least one segment
        let command = segments[0];
        let body = if segments.len() > 2 {
            &segments[1..segments.len() - 2]
        } else {
            &[][..]
        };

        match command {
            CMD_UPDATE => self.apply_update(body, table),
            CMD_QUERY => self.answer_query(body, table),
            _ => Ok(raw.to_string()),
        }
    }

    /// Insert every announced route, in body order.
    ///
    /// Order matters: with equal costs at the same prefix, later lines
    /// supersede earlier ones.
    fn apply_update(&self, body: &[&str], table: &mut RouteTable) -> Result<String, ProtocolError> {
        for line in body {
            let route = parse_route_line(line)?;
            tracing::debug!(route = %route, "Route announced");
            table.insert(route);
        }
        Ok(format!("ACK{DELIMITER}END{DELIMITER}"))
    }

    fn answer_query(&self, body: &[&str], table: &RouteTable) -> Result<String, ProtocolError> {
        let queried = body.first().ok_or(ProtocolError::MissingBody(CMD_QUERY))?;
        let path = addr::parse(queried)?;
        let route = table.lookup(path);
        Ok(format!(
            "RESULT{DELIMITER}{queried} {} {}{DELIMITER}END{DELIMITER}",
            route.router_id, route.cost
        ))
    }
}

/// Parse one `<routerId> <network>/<prefixLength> <cost>` line.
fn parse_route_line(line: &str) -> Result<Route, ProtocolError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != 3 {
        return Err(ProtocolError::MalformedRouteLine(line.to_string()));
    }
    let cost: u32 = tokens[2]
        .parse()
        .map_err(|_| ProtocolError::MalformedRouteLine(line.to_string()))?;
    let prefix = addr::parse(tokens[1])?;
    Ok(Route::new(tokens[0], prefix.network(), prefix.len(), cost))
}
