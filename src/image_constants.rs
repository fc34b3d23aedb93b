// Licensed under the Open Software License version 3.0
//! Pixel dimensions of the infrared camera sensor.

/// Native sensor height in pixels
pub const IR_HEIGHT: usize = 120;
/// Native sensor width in pixels
pub const IR_WIDTH: usize = 160;
/// Pixels in one native frame
pub const IR_PIXEL_COUNT: usize = IR_HEIGHT * IR_WIDTH;
/// Display height of an upscaled frame
pub const IR_SCALING_HEIGHT: usize = 480;
/// Display width of an upscaled frame
pub const IR_SCALING_WIDTH: usize = 640;
/// Upscaling factor shared by both axes
pub const IR_SCALING_FACTOR: usize = IR_SCALING_HEIGHT / IR_HEIGHT;

// Both axes scale by the same whole factor
const _: () = assert!(IR_SCALING_HEIGHT % IR_HEIGHT == 0);
const _: () = assert!(IR_SCALING_WIDTH % IR_WIDTH == 0);
const _: () = assert!(IR_SCALING_WIDTH / IR_WIDTH == IR_SCALING_FACTOR);
