// Licensed under the Open Software License version 3.0
use crate::{
    error::{Error, Result},
    image_constants::{IR_HEIGHT, IR_PIXEL_COUNT, IR_WIDTH},
};
use std::{fs::read_to_string, path::Path};

const CENTI_KELVIN_AT_ZERO_CELSIUS: i32 = 27315;

/// Converts a raw Lepton pixel value (hundredths of a kelvin) to °C
pub fn centi_kelvin_to_celsius(centi_kelvin: i32) -> f32 {
    (centi_kelvin - CENTI_KELVIN_AT_ZERO_CELSIUS) as f32 / 100.0
}

/// Converts kelvin to °C rounded to two decimals
pub fn kelvin_to_celsius(kelvin: f32) -> f32 {
    ((kelvin - 273.15) * 100.0).round() / 100.0
}

/// `IrFrame`
/// is one raw infrared frame in sensor resolution.
/// Pixels are stored row by row in centi-kelvin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrFrame {
    pixels: Vec<i32>,
}

impl IrFrame {
    /// Parse whitespace separated pixel values.
    /// Fails unless there is exactly one integer per sensor pixel.
    pub fn parse(text: &str) -> Result<Self> {
        let pixels = text
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<i32>().map_err(|_| Error::IrPixel {
                    index,
                    value: token.to_string(),
                })
            })
            .collect::<Result<Vec<i32>>>()?;
        if pixels.len() != IR_PIXEL_COUNT {
            return Err(Error::IrPixelCount {
                expected: IR_PIXEL_COUNT,
                actual: pixels.len(),
            });
        }
        Ok(Self { pixels })
    }

    pub fn read(path: &Path) -> Result<Self> {
        tracing::trace!("Reading infrared frame: {}", path.display());
        let text = read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn pixels(&self) -> &[i32] {
        &self.pixels
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<i32> {
        if row >= IR_HEIGHT || col >= IR_WIDTH {
            return None;
        }
        self.pixels.get(row * IR_WIDTH + col).copied()
    }

    pub fn temperature_in_c(&self, row: usize, col: usize) -> Option<f32> {
        self.pixel(row, col).map(centi_kelvin_to_celsius)
    }

    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|pixel| pixel.to_le_bytes())
            .collect()
    }
}
