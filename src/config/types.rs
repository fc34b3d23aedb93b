// Licensed under the Open Software License version 3.0
use crate::raw_temperature::config::TemperatureReaderConfig;
use serde::{Deserialize, Serialize};

// Values to generate example config file
pub trait Example {
    fn example() -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// `Config` struct for deserializing config.json
pub struct Config {
    pub temperature_reader: TemperatureReaderConfig,
}

impl Example for Config {
    fn example() -> Self {
        Self {
            temperature_reader: TemperatureReaderConfig::example(),
        }
    }
}
