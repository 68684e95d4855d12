//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use route_server::config::ServerConfig;
use route_server::net::listener::Listener;
use route_server::{RouteServer, Shutdown};

/// Start a server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; trigger it at the
/// end of the test to stop the accept loop.
pub async fn start_server(mut config: ServerConfig) -> (SocketAddr, Shutdown) {
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = Listener::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = RouteServer::new(&config);
    tokio::spawn(async move {
        server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Send one request and read everything until the server closes.
///
/// The server answers at most one request per connection, so the close
/// is the response terminator.
pub async fn send_request(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}
