// Licensed under the Open Software License version 3.0
//! Readings written by the Click temperature sensor script.
//! The script drops one `.rawtemp` file per sampling round into a directory,
//! the reader loop turns them into `TemperatureReading`s.
pub mod config;
pub mod format;
pub mod reader;
pub mod scanner;
pub mod simulator;
