// Licensed under the Open Software License version 3.0
use crate::reading::{to_tagged_json, Payload, TemperatureReading};
use tokio::sync::broadcast::{self, error::RecvError};

fn log_reading(reading: &TemperatureReading) {
    tracing::info!("Received temperature data: {}", reading);
    match to_tagged_json(&Payload::from(reading.clone())) {
        Ok(json) => tracing::trace!("{}", json),
        Err(error) => tracing::warn!("Failed to serialize reading: {}", error),
    }
}

pub async fn start_reading_logger_loop(
    mut shutdown_rx: broadcast::Receiver<()>,
    mut rx: broadcast::Receiver<Vec<TemperatureReading>>,
) {
    tracing::debug!("Starting reading logger loop");
    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Ok(readings) => readings.iter().for_each(log_reading),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Reading logger lagged behind, skipped {} batches", skipped);
                }
                Err(RecvError::Closed) => {
                    tracing::trace!("Readings channel closed");
                    break;
                }
            },
            _ = shutdown_rx.recv() => {
                tracing::trace!("Shutting down reading logger loop");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_stops_when_channel_closes() {
        let (_shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
        let (tx, rx) = broadcast::channel::<Vec<TemperatureReading>>(4);
        tx.send(vec![TemperatureReading::new(21.0, "0x48", Utc::now())])
            .unwrap();
        drop(tx);
        start_reading_logger_loop(shutdown_rx, rx).await;
    }

    #[tokio::test]
    async fn test_stops_on_shutdown() {
        let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
        let (_tx, rx) = broadcast::channel::<Vec<TemperatureReading>>(4);
        shutdown_tx.send(()).unwrap();
        start_reading_logger_loop(shutdown_rx, rx).await;
    }

    #[tokio::test]
    async fn test_keeps_running_after_lag() {
        let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
        let (tx, rx) = broadcast::channel::<Vec<TemperatureReading>>(1);
        // Overflow the channel before the loop starts receiving
        for _ in 0..3 {
            tx.send(vec![TemperatureReading::new(21.0, "0x48", Utc::now())])
                .unwrap();
        }
        let handle = tokio::spawn(start_reading_logger_loop(shutdown_rx, rx));
        tokio::time::sleep(Duration::from_millis(100)).await;
        // Sender stays alive, only a lag-induced exit could stop the loop here
        tx.send(vec![TemperatureReading::new(22.0, "0x48", Utc::now())])
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!handle.is_finished());
        shutdown_tx.send(()).unwrap();
        handle.await.unwrap();
    }
}
