//! Accept loop and request handling.
//!
//! # Responsibilities
//! - Accept connections one at a time and handle each to completion
//! - Hand the request text to the dispatcher and write its response
//! - Drop the connection without a response on any request error
//!
//! # Design Decisions
//! - Connections are handled inline, not spawned: the next accept only
//!   happens after the current request is answered, so the route table
//!   is plain mutable state with no lock
//! - A failed accept is logged and the loop continues

use std::net::Ipv4Addr;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::sync::broadcast;

use crate::config::ServerConfig;
use crate::net::connection::Connection;
use crate::net::listener::Listener;
use crate::proto::dispatcher::Dispatcher;
use crate::routing::route::Route;
use crate::routing::trie::RouteTable;

/// The route server: one table, one dispatcher, one connection at a time.
pub struct RouteServer {
    table: RouteTable,
    dispatcher: Dispatcher,
    recv_timeout: Duration,
}

impl RouteServer {
    /// Build a server whose table starts with the configured catch-all.
    pub fn new(config: &ServerConfig) -> Self {
        let catch_all = Route::new(
            config.routing.default_router_id.clone(),
            Ipv4Addr::UNSPECIFIED,
            0,
            config.routing.default_cost,
        );
        Self {
            table: RouteTable::new(catch_all),
            dispatcher: Dispatcher::new(),
            recv_timeout: Duration::from_secs(config.timeouts.recv_secs),
        }
    }

    /// Run the accept loop until the shutdown signal fires.
    pub async fn run(mut self, listener: Listener, mut shutdown: broadcast::Receiver<()>) {
        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => self.handle_connection(stream, peer).await,
                        Err(e) => tracing::warn!(error = %e, "Accept failed"),
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received, stopping accept loop");
                    break;
                }
            }
        }
        tracing::info!("Route server stopped");
    }

    /// Serve one connection: read, dispatch, respond, close.
    ///
    /// Request errors close the connection with nothing written; the
    /// client observes the close, not an error message.
    async fn handle_connection(&mut self, stream: TcpStream, peer: std::net::SocketAddr) {
        let mut conn = Connection::new(stream, peer);

        let request = match conn.read_request(self.recv_timeout).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    connection_id = %conn.id(),
                    peer_addr = %conn.peer(),
                    error = %e,
                    "Dropping connection before dispatch"
                );
                return;
            }
        };

        match self.dispatcher.dispatch(&request, &mut self.table) {
            Ok(response) => {
                if let Err(e) = conn.send_response(&response).await {
                    tracing::warn!(
                        connection_id = %conn.id(),
                        error = %e,
                        "Failed to write response"
                    );
                } else {
                    tracing::debug!(
                        connection_id = %conn.id(),
                        request_bytes = request.len(),
                        response_bytes = response.len(),
                        "Request answered"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    connection_id = %conn.id(),
                    peer_addr = %conn.peer(),
                    error = %e,
                    "Request failed, closing without response"
                );
            }
        }
    }
}
