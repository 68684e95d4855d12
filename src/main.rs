//! Route table server.
//!
//! Clients announce routes and query destinations over a line-oriented
//! TCP protocol:
//!
//! ```text
//!     Client                          Server
//!     ──────────────────────────────▶ net (listener, timed read)
//!     UPDATE\r\nR1 10.0.0.0/24 10... → proto (parse command + body)
//!                                    → routing (trie insert / lookup)
//!     ◀────────────────────────────── proto (ACK / RESULT / echo)
//! ```
//!
//! Connections are served one at a time; the route table lives for the
//! whole process and is mutated by every UPDATE.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use route_server::config::{loader, ServerConfig};
use route_server::lifecycle::{shutdown::Shutdown, signals};
use route_server::net::listener::Listener;
use route_server::observability::logging;
use route_server::RouteServer;

#[derive(Parser)]
#[command(name = "route-server")]
#[command(about = "Line-protocol route table server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the port from the configuration.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(port) = cli.port {
        let mut addr: SocketAddr = config.listener.bind_address.parse()?;
        addr.set_port(port);
        config.listener.bind_address = addr.to_string();
    }

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        recv_timeout_secs = config.timeouts.recv_secs,
        default_router_id = %config.routing.default_router_id,
        default_cost = config.routing.default_cost,
        "Configuration loaded"
    );

    let listener = Listener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    let server = RouteServer::new(&config);
    server.run(listener, shutdown.subscribe()).await;

    tracing::info!("Shutdown complete");
    Ok(())
}
