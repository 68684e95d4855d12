//! Per-connection identity and I/O.
//!
//! # Responsibilities
//! - Generate unique connection IDs for log correlation
//! - Read the single request a connection gets to make, under a timeout
//! - Write the response bytes back
//!
//! # Design Decisions
//! - One request per connection; no reassembly beyond the single read
//! - Invalid UTF-8 and timeouts are request errors, reported upward

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Upper bound on a single request, matching the one-read framing.
const RECV_BUFFER_SIZE: usize = 8192;

/// Global atomic counter for connection IDs.
/// Relaxed ordering is sufficient since we only need uniqueness, not
/// synchronization.
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Generate a new unique connection ID.
    pub fn new() -> Self {
        Self(CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Errors that drop a connection without a response.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out waiting for the request")]
    RecvTimeout,

    #[error("request is not valid UTF-8")]
    InvalidUtf8,
}

/// One accepted client connection.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    id: ConnectionId,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr) -> Self {
        Self {
            stream,
            peer,
            id: ConnectionId::new(),
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Read the request with a receive timeout.
    ///
    /// A client that sends nothing inside the timeout is dropped, the
    /// same as one that sends garbage.
    pub async fn read_request(&mut self, timeout: Duration) -> Result<String, ConnectionError> {
        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        let n = tokio::time::timeout(timeout, self.stream.read(&mut buf))
            .await
            .map_err(|_| ConnectionError::RecvTimeout)??;
        let text = std::str::from_utf8(&buf[..n]).map_err(|_| ConnectionError::InvalidUtf8)?;
        Ok(text.to_string())
    }

    /// Write the response bytes back to the client.
    pub async fn send_response(&mut self, response: &str) -> Result<(), ConnectionError> {
        self.stream.write_all(response.as_bytes()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_id_unique() {
        let id1 = ConnectionId::new();
        let id2 = ConnectionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn connection_id_display() {
        let id = ConnectionId::new();
        assert!(id.to_string().starts_with("conn-"));
    }
}
