// Licensed under the Open Software License version 3.0
use tokio::sync::broadcast::Sender;

/// Waits for Ctrl-C and tells every loop to stop
pub async fn start_shutdown_notifier(tx: Sender<()>) {
    tracing::trace!("Starting shutdown notifier");
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", error);
    } else {
        tracing::debug!("Received shutdown signal");
    }
    tracing::trace!("Stopping {} loops", tx.receiver_count());
    let _ = tx.send(());
}
