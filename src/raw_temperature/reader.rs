// Licensed under the Open Software License version 3.0
use super::{
    config::TemperatureReaderConfig, format::parse_raw_temperatures,
    scanner::get_all_raw_temperature_files,
};
use crate::{error::Result, reading::TemperatureReading};
use chrono::{DateTime, Utc};
use std::{
    cmp::max,
    path::Path,
    time::{Duration, SystemTime},
};
use tokio::{fs, sync::broadcast, time::sleep};

const MIN_COOLDOWN: Duration = Duration::from_millis(50);

/// Moment the sensor script wrote the file.
/// Not every filesystem records creation time.
fn written_at(metadata: &std::fs::Metadata) -> DateTime<Utc> {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}

fn age(metadata: &std::fs::Metadata) -> Duration {
    metadata
        .modified()
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .unwrap_or_default()
}

/// Reads one `.rawtemp` file and returns readings of wanted devices.
/// Waits for `settle_time` first if the file is still fresh.
pub async fn read_raw_temperature_file(
    path: &Path,
    devices: &[String],
    settle_time: Duration,
) -> Result<Vec<TemperatureReading>> {
    if age(&fs::metadata(path).await?) < settle_time {
        tracing::trace!("Waiting for {} to be fully written", path.display());
        sleep(settle_time).await;
    }
    let metadata = fs::metadata(path).await?;
    let contents = fs::read_to_string(path).await?;
    let readings = parse_raw_temperatures(&contents, written_at(&metadata))?;
    Ok(readings
        .into_iter()
        .filter(|reading| devices.is_empty() || devices.iter().any(|d| d == reading.device()))
        .collect())
}

async fn consume_raw_temperature_file(
    path: &Path,
    devices: &[String],
    settle_time: Duration,
) -> Vec<TemperatureReading> {
    let readings = match read_raw_temperature_file(path, devices, settle_time).await {
        Ok(readings) => readings,
        Err(error) => {
            tracing::error!("Failed to read {}: {}", path.display(), error);
            Vec::new()
        }
    };
    // Remove even broken files so they aren't read again
    if let Err(error) = fs::remove_file(path).await {
        tracing::warn!("Failed to remove {}: {}", path.display(), error);
    }
    readings
}

pub async fn start_temperature_reader_loop(
    mut shutdown_rx: broadcast::Receiver<()>,
    config: TemperatureReaderConfig,
    tx: broadcast::Sender<Vec<TemperatureReading>>,
) {
    // Check if module is enabled
    if !config.is_enabled() {
        tracing::trace!("Module is disabled");
        return;
    }
    tracing::debug!("Starting temperature reader loop");
    // Extract config fields
    let base_path = config.get_base_path();
    let devices = config.get_devices();
    let settle_time = config.get_settle_time();
    let cooldown = max(config.get_cooldown(), MIN_COOLDOWN);
    loop {
        // Scan inside loop to pick up files written since the last round
        let files = get_all_raw_temperature_files(&base_path).await;
        for file in files {
            let readings = consume_raw_temperature_file(&file, &devices, settle_time).await;
            if readings.is_empty() {
                continue;
            }
            tracing::trace!("Sending {:?} to channel", readings);
            if tx.receiver_count() > 0 {
                let _ = tx.send(readings);
            }
        }
        tokio::select! {
            _ = shutdown_rx.recv() => {
                tracing::trace!("Shutting down temperature reader loop");
                break;
            }
            _ = sleep(cooldown) => {}
        }
    }
}
