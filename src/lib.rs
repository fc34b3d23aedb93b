// Licensed under the Open Software License version 3.0
//! Data shared by the plant monitor: temperature readings and
//! the geometry of the infrared camera sensor.
pub mod config;
pub mod error;
pub mod image_constants;
pub mod ir_frame;
pub mod raw_temperature;
pub mod reading;
pub mod reading_logger;
pub mod shutdown_notifier;

pub use error::{Error, Result};
pub use reading::{Payload, TemperatureReading};
