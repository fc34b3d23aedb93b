// Licensed under the Open Software License version 3.0
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `TemperatureReading`
/// is a single temperature sample taken by one device.
/// Fields can't be changed after construction,
/// a changed reading is a new `TemperatureReading`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureReading {
    temperature_in_c: f32,
    device: String,
    time: DateTime<Utc>,
}

impl TemperatureReading {
    pub fn new(temperature_in_c: f32, device: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            temperature_in_c,
            device: device.into(),
            time,
        }
    }

    pub fn temperature_in_c(&self) -> f32 {
        self.temperature_in_c
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} °C at {}",
            self.device,
            self.temperature_in_c,
            self.time.to_rfc3339()
        )
    }
}

/// Payloads that can arrive through a generic channel.
/// Serialized with a `$type` discriminator next to the fields
/// so the receiver knows which shape to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Payload {
    TemperatureReading(TemperatureReading),
}

impl From<TemperatureReading> for Payload {
    fn from(reading: TemperatureReading) -> Self {
        Payload::TemperatureReading(reading)
    }
}

pub fn to_json(reading: &TemperatureReading) -> Result<String> {
    Ok(serde_json::to_string(reading)?)
}

pub fn from_json(json: &str) -> Result<TemperatureReading> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_tagged_json(payload: &Payload) -> Result<String> {
    Ok(serde_json::to_string(payload)?)
}

pub fn from_tagged_json(json: &str) -> Result<Payload> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn example_reading() -> TemperatureReading {
        TemperatureReading::new(23.5, "sensor-1", new_year())
    }

    #[test]
    fn new() {
        let reading = example_reading();
        assert_eq!(reading.temperature_in_c(), 23.5);
        assert_eq!(reading.device(), "sensor-1");
        assert_eq!(reading.time(), new_year());
    }

    #[test]
    fn clone_is_independent() {
        let reading = example_reading();
        let copy = reading.clone();
        drop(reading);
        assert_eq!(copy, example_reading());
    }

    #[test]
    fn equality() {
        let reading = example_reading();
        assert_eq!(reading, example_reading());
        assert_ne!(
            reading,
            TemperatureReading::new(23.6, "sensor-1", new_year())
        );
        assert_ne!(
            reading,
            TemperatureReading::new(23.5, "sensor-2", new_year())
        );
        assert_ne!(
            reading,
            TemperatureReading::new(23.5, "sensor-1", new_year() + chrono::Duration::seconds(1))
        );
    }

    #[test]
    fn serialize_field_names() {
        let json = to_json(&example_reading()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!({
                "temperatureInC": 23.5,
                "device": "sensor-1",
                "time": "2024-01-01T00:00:00Z"
            })
        );
    }

    #[test]
    fn json_round_trip() {
        let reading = TemperatureReading::new(-4.125, "0x48", Utc.timestamp_opt(1_700_000_123, 0).unwrap());
        let json = to_json(&reading).unwrap();
        assert_eq!(from_json(&json).unwrap(), reading);
    }

    #[test]
    fn tagged_json_has_discriminator() {
        let json = to_tagged_json(&example_reading().into()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["$type"], "TemperatureReading");
        assert_eq!(value["device"], "sensor-1");
        assert_eq!(value["temperatureInC"], 23.5);
    }

    #[test]
    fn tagged_json_round_trip() {
        let payload = Payload::from(example_reading());
        let json = to_tagged_json(&payload).unwrap();
        let Payload::TemperatureReading(reading) = from_tagged_json(&json).unwrap();
        assert_eq!(reading, example_reading());
    }

    #[test]
    fn offset_is_normalized_to_utc() {
        let json = r#"{"temperatureInC":23.5,"device":"sensor-1","time":"2024-01-01T02:00:00+02:00"}"#;
        assert_eq!(from_json(json).unwrap(), example_reading());
    }

    #[test]
    fn missing_field() {
        let json = r#"{"temperatureInC":23.5,"time":"2024-01-01T00:00:00Z"}"#;
        let error = from_json(json).unwrap_err();
        assert!(matches!(error, Error::Decode(_)));
        assert!(error.to_string().contains("device"));
    }

    #[test]
    fn wrong_field_type() {
        let json = r#"{"temperatureInC":"warm","device":"sensor-1","time":"2024-01-01T00:00:00Z"}"#;
        assert!(matches!(from_json(json), Err(Error::Decode(_))));
    }

    #[test]
    fn unknown_tag() {
        let json = r#"{"$type":"HumidityReading","device":"sensor-1"}"#;
        let error = from_tagged_json(json).unwrap_err();
        assert!(error.to_string().contains("HumidityReading"));
    }

    #[test]
    fn missing_tag() {
        let json = to_json(&example_reading()).unwrap();
        assert!(from_tagged_json(&json).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(
            example_reading().to_string(),
            "sensor-1: 23.5 °C at 2024-01-01T00:00:00+00:00"
        );
    }
}
