//! Wire-level integration tests for the route server.

use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use route_server::config::ServerConfig;

mod common;

#[tokio::test]
async fn announce_then_query_returns_route() {
    let (addr, shutdown) = common::start_server(ServerConfig::default()).await;

    let ack = common::send_request(addr, "UPDATE\r\nR1 10.0.0.0/24 10\r\n\r\n").await;
    assert_eq!(ack, "ACK\r\nEND\r\n");

    let result = common::send_request(addr, "QUERY\r\n10.0.0.5\r\n\r\n").await;
    assert_eq!(result, "RESULT\r\n10.0.0.5 R1 10\r\nEND\r\n");

    shutdown.trigger();
}

#[tokio::test]
async fn table_state_survives_across_connections() {
    let (addr, shutdown) = common::start_server(ServerConfig::default()).await;

    common::send_request(addr, "UPDATE\r\nR1 10.0.0.0/24 10\r\n\r\n").await;
    common::send_request(addr, "UPDATE\r\nR2 10.0.0.0/24 5\r\n\r\n").await;

    // The lower cost announced on the second connection wins.
    let result = common::send_request(addr, "QUERY\r\n10.0.0.5\r\n\r\n").await;
    assert_eq!(result, "RESULT\r\n10.0.0.5 R2 5\r\nEND\r\n");

    shutdown.trigger();
}

#[tokio::test]
async fn query_on_empty_table_returns_default_route() {
    let (addr, shutdown) = common::start_server(ServerConfig::default()).await;

    let result = common::send_request(addr, "QUERY\r\n255.255.255.255\r\n\r\n").await;
    assert_eq!(result, "RESULT\r\n255.255.255.255 A 100\r\nEND\r\n");

    shutdown.trigger();
}

#[tokio::test]
async fn configured_catch_all_is_reported() {
    let mut config = ServerConfig::default();
    config.routing.default_router_id = "Z".to_string();
    config.routing.default_cost = 7;
    let (addr, shutdown) = common::start_server(config).await;

    let result = common::send_request(addr, "QUERY\r\n192.0.2.1\r\n\r\n").await;
    assert_eq!(result, "RESULT\r\n192.0.2.1 Z 7\r\nEND\r\n");

    shutdown.trigger();
}

#[tokio::test]
async fn unknown_command_is_echoed() {
    let (addr, shutdown) = common::start_server(ServerConfig::default()).await;

    let raw = "HELLO\r\nanything goes\r\n\r\n";
    let echoed = common::send_request(addr, raw).await;
    assert_eq!(echoed, raw);

    shutdown.trigger();
}

#[tokio::test]
async fn malformed_update_closes_without_response() {
    let (addr, shutdown) = common::start_server(ServerConfig::default()).await;

    let response = common::send_request(addr, "UPDATE\r\nR1 999.0.0.0/24 10\r\n\r\n").await;
    assert_eq!(response, "");

    shutdown.trigger();
}

#[tokio::test]
async fn partial_update_keeps_earlier_routes() {
    let (addr, shutdown) = common::start_server(ServerConfig::default()).await;

    let response =
        common::send_request(addr, "UPDATE\r\nR1 10.0.0.0/24 10\r\nR2 bogus 5\r\n\r\n").await;
    assert_eq!(response, "");

    // No rollback: the line before the malformed one is still in.
    let result = common::send_request(addr, "QUERY\r\n10.0.0.5\r\n\r\n").await;
    assert_eq!(result, "RESULT\r\n10.0.0.5 R1 10\r\nEND\r\n");

    shutdown.trigger();
}

#[tokio::test]
async fn idle_connection_times_out_silently() {
    let mut config = ServerConfig::default();
    config.timeouts.recv_secs = 1;
    let (addr, shutdown) = common::start_server(config).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let mut response = Vec::new();

    // Send nothing; the server should close the connection after its
    // receive timeout without writing a byte.
    let read = tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut response))
        .await
        .expect("server should close the idle connection");
    assert_eq!(read.unwrap(), 0);

    shutdown.trigger();
}
