// Licensed under the Open Software License version 3.0
use super::{
    config::TemperatureReaderConfig,
    format::{format_raw_temperatures, RAW_TEMPERATURE_EXTENSION},
};
use rand::Rng;
use std::{path::Path, time::Duration};
use tokio::{fs, sync::broadcast, time::sleep};

const MAX_SIMULATED_TEMPERATURE: f32 = 30.0;

fn simulated_devices(config: &TemperatureReaderConfig) -> Vec<String> {
    let devices = config.get_devices();
    if devices.is_empty() {
        return vec![String::from("0xff"), String::from("0x00")];
    }
    devices
}

async fn write_simulated_file(base_path: &Path, counter: u32, devices: &[String]) -> std::io::Result<()> {
    let temperatures: Vec<(String, f32)> = {
        let mut rng = rand::thread_rng();
        devices
            .iter()
            .map(|device| {
                (
                    device.clone(),
                    rng.gen_range(0.0..MAX_SIMULATED_TEMPERATURE),
                )
            })
            .collect()
    };
    let path = base_path.join(format!("{:06}.{}", counter, RAW_TEMPERATURE_EXTENSION));
    tracing::trace!("Writing simulated temperatures to {}", path.display());
    fs::write(path, format_raw_temperatures(&temperatures)).await
}

/// Empties the directory the simulator writes to.
/// Must run before the reader loop starts scanning it.
/// # Returns
/// `true` if the directory was prepared
/// `false` if simulation is disabled
pub async fn prepare_simulation_directory(config: &TemperatureReaderConfig) -> std::io::Result<bool> {
    if !config.is_enabled() || !config.is_simulated() {
        return Ok(false);
    }
    let base_path = config.get_base_path();
    if base_path.exists() {
        tracing::debug!("Clearing {}", base_path.display());
        fs::remove_dir_all(&base_path).await?;
    }
    fs::create_dir_all(&base_path).await?;
    Ok(true)
}

/// Stands in for the sensor script on machines without sensors
pub async fn start_simulated_sensor_loop(
    mut shutdown_rx: broadcast::Receiver<()>,
    config: TemperatureReaderConfig,
) {
    if !config.is_enabled() || !config.is_simulated() {
        tracing::trace!("Simulation is disabled");
        return;
    }
    tracing::debug!("Starting simulated sensor loop");
    let base_path = config.get_base_path();
    let devices = simulated_devices(&config);
    if let Err(error) = fs::create_dir_all(&base_path).await {
        tracing::error!("Failed to create {}: {}", base_path.display(), error);
        return;
    }
    let mut counter: u32 = 0;
    loop {
        let delay = Duration::from_millis(rand::thread_rng().gen_range(200..1000));
        tokio::select! {
            _ = shutdown_rx.recv() => {
                tracing::trace!("Shutting down simulated sensor loop");
                break;
            }
            _ = sleep(delay) => {}
        }
        if let Err(error) = write_simulated_file(&base_path, counter, &devices).await {
            tracing::warn!("Failed to write simulated temperatures: {}", error);
        }
        counter = counter.wrapping_add(1);
    }
}
