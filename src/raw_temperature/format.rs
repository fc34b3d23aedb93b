// Licensed under the Open Software License version 3.0
use crate::{
    error::{Error, Result},
    reading::TemperatureReading,
};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::{path::Path, sync::OnceLock};

pub const RAW_TEMPERATURE_EXTENSION: &str = "rawtemp";
const RAW_TEMPERATURE_FILE_NAME_REGEX: &str = r"^[0-9]+\.rawtemp$";
const RAW_TEMPERATURE_LINE_REGEX: &str = r"^\s*([^:\s]+)\s*:\s*(\S+)\s*$";

fn file_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RAW_TEMPERATURE_FILE_NAME_REGEX).unwrap())
}

fn line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RAW_TEMPERATURE_LINE_REGEX).unwrap())
}

pub fn is_raw_temperature_file(path: &Path) -> bool {
    // Path must be a file
    if !path.is_file() {
        return false;
    }
    // File name must be "<digits>.rawtemp"
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => file_name_regex().is_match(name),
        None => false,
    }
}

/// Parse `device: temperature` lines of a `.rawtemp` file.
/// Every reading gets the same `time`, the moment the file was written.
pub fn parse_raw_temperatures(contents: &str, time: DateTime<Utc>) -> Result<Vec<TemperatureReading>> {
    let mut readings = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let captures = line_regex()
            .captures(line)
            .ok_or_else(|| Error::RawTemperatureLine {
                line_number: index + 1,
                line: line.to_string(),
            })?;
        let device = &captures[1];
        let value = &captures[2];
        // inf and NaN parse as f32 but have no JSON representation
        let temperature = value
            .parse::<f32>()
            .ok()
            .filter(|temperature| temperature.is_finite())
            .ok_or_else(|| Error::InvalidTemperature {
                device: device.to_string(),
                value: value.to_string(),
            })?;
        readings.push(TemperatureReading::new(temperature, device, time));
    }
    Ok(readings)
}

pub fn format_raw_temperatures(temperatures: &[(String, f32)]) -> String {
    temperatures
        .iter()
        .map(|(device, temperature)| format!("{}: {}\n", device, temperature))
        .collect()
}
