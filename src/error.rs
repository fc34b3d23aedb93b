// Licensed under the Open Software License version 3.0
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line_number} is not in \"device: temperature\" format: {line:?}")]
    RawTemperatureLine { line_number: usize, line: String },
    #[error("temperature {value:?} of device {device} is not a number")]
    InvalidTemperature { device: String, value: String },
    #[error("pixel {index} is not an integer: {value:?}")]
    IrPixel { index: usize, value: String },
    #[error("expected {expected} pixels in infrared frame, got {actual}")]
    IrPixelCount { expected: usize, actual: usize },
}
