//! Signal handling for graceful daemon shutdown.
//!
//! Cross-platform signal handling so the daemon can stop the seeding task
//! cleanly when it receives a termination signal.

use tokio::signal;
use tracing::info;

/// Waits for a shutdown signal.
///
/// Listens for SIGINT and SIGTERM on Unix, Ctrl+C on Windows, and returns
/// when one is received so the caller can perform cleanup before exiting.
pub async fn setup_signal_handlers() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    {
        use signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM");
            }
        }
    }

    #[cfg(windows)]
    {
        signal::ctrl_c().await?;
        info!("Received Ctrl+C");
    }

    Ok(())
}
