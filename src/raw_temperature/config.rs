// Licensed under the Open Software License version 3.0
use crate::config::types::Example;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

const DEFAULT_BASE_PATH: &str = "/var/lib/plant-sensor-data/rawtemp";
const DEFAULT_COOLDOWN: Duration = Duration::from_millis(100);
const DEFAULT_SETTLE_TIME: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureReaderConfig {
    enabled: Option<bool>,
    base_path: Option<String>,
    devices: Option<Vec<String>>,
    cooldown: Option<Duration>,
    settle_time: Option<Duration>,
    simulate: Option<bool>,
}

impl Default for TemperatureReaderConfig {
    // Fallback values
    fn default() -> Self {
        Self {
            enabled: Some(false),
            base_path: Some(String::from(DEFAULT_BASE_PATH)),
            devices: None,
            cooldown: Some(DEFAULT_COOLDOWN),
            settle_time: Some(DEFAULT_SETTLE_TIME),
            simulate: Some(false),
        }
    }
}

impl Example for TemperatureReaderConfig {
    fn example() -> Self {
        Self {
            enabled: Some(true),
            base_path: Some(String::from(DEFAULT_BASE_PATH)),
            devices: Some(vec![String::from("0x48"), String::from("0x49")]),
            cooldown: Some(DEFAULT_COOLDOWN),
            settle_time: Some(DEFAULT_SETTLE_TIME),
            simulate: Some(false),
        }
    }
}

impl TemperatureReaderConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or_default()
    }

    pub fn get_base_path(&self) -> PathBuf {
        PathBuf::from(
            self.base_path
                .clone()
                .unwrap_or_else(|| String::from(DEFAULT_BASE_PATH)),
        )
    }

    /// Devices to publish readings for, empty means all of them
    pub fn get_devices(&self) -> Vec<String> {
        self.devices.clone().unwrap_or_default()
    }

    pub fn get_cooldown(&self) -> Duration {
        self.cooldown.unwrap_or(DEFAULT_COOLDOWN)
    }

    pub fn get_settle_time(&self) -> Duration {
        self.settle_time.unwrap_or(DEFAULT_SETTLE_TIME)
    }

    pub fn is_simulated(&self) -> bool {
        self.simulate.unwrap_or_default()
    }
}
