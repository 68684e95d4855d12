//! OS signal handling.
//!
//! # Responsibilities
//! - Translate ctrl-c into the internal shutdown signal

use crate::lifecycle::shutdown::Shutdown;

/// Spawn the task that waits for ctrl-c and triggers shutdown.
pub fn spawn_signal_handler(shutdown: Shutdown) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Ctrl-c received, shutting down");
                shutdown.trigger();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for the shutdown signal");
            }
        }
    });
}
