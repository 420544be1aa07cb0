//! The shared pixel grid and its channel helpers

/// Immutable 3-channel 8-bit pixel grid
pub mod buffer;
/// Clamping and rounding of channel values
pub mod clamp;

pub use buffer::{Pixel, Raster};
