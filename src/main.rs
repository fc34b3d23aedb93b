// Licensed under the Open Software License version 3.0
use plant_sensor_data::{
    config::file::read_config_or_create_example,
    raw_temperature::{
        reader::start_temperature_reader_loop,
        simulator::{prepare_simulation_directory, start_simulated_sensor_loop},
    },
    reading::TemperatureReading,
    reading_logger::start_reading_logger_loop,
    shutdown_notifier::start_shutdown_notifier,
};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive("plant_sensor_data=info".parse().unwrap())
                .from_env_lossy(),
        )
        .init();

    let config = read_config_or_create_example();

    // Clear simulated output before the reader starts scanning
    if let Err(error) = prepare_simulation_directory(&config.temperature_reader).await {
        tracing::error!("Failed to prepare simulation directory: {}", error);
        std::process::exit(1);
    }

    // Prepare channels for async tasks
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    const BROADCAST_CAPACITY: usize = 16;
    let (readings_tx, readings_rx) =
        broadcast::channel::<Vec<TemperatureReading>>(BROADCAST_CAPACITY);

    let shutdown_notifier_handle = tokio::spawn(async move {
        start_shutdown_notifier(shutdown_tx).await;
    });

    // Consumer
    let shutdown_rx_clone = shutdown_rx.resubscribe();
    let reading_logger_handle = tokio::spawn(async move {
        start_reading_logger_loop(shutdown_rx_clone, readings_rx).await;
    });

    // Fake sensor output for development machines
    let shutdown_rx_clone = shutdown_rx.resubscribe();
    let simulator_config = config.temperature_reader.clone();
    let simulator_handle = tokio::spawn(async move {
        start_simulated_sensor_loop(shutdown_rx_clone, simulator_config).await;
    });

    // Producer
    // Don't clone shutdown_rx as this is the last module
    let temperature_reader_handle = tokio::spawn(async move {
        start_temperature_reader_loop(shutdown_rx, config.temperature_reader, readings_tx).await;
    });

    let _ = tokio::try_join!(
        shutdown_notifier_handle,
        reading_logger_handle,
        simulator_handle,
        temperature_reader_handle
    );

    tracing::debug!("Successfully shut down");
}
