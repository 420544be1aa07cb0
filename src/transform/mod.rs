//! Pixel transforms that map one raster to another
//!
//! Every transform is constructed from validated parameters and is then total
//! over its raster input.

use crate::raster::Raster;

/// Linear 3x3 color matrices (greyscale, sepia)
pub mod color;
/// Kernel convolution with zero-contribution borders (blur, sharpen)
pub mod convolution;
/// Floyd-Steinberg style error diffusion to black and white
pub mod dither;
/// Nearest-seed region averaging
pub mod mosaic;

pub use color::{ColorMatrix, LinearColorTransform};
pub use convolution::{ConvolutionFilter, Kernel};
pub use dither::ErrorDiffusionDither;
pub use mosaic::{Cluster, Mosaic, Seed};

/// Capability shared by every raster-to-raster operation
pub trait RasterTransform {
    /// Produce a new raster from `raster`, leaving the input untouched
    fn apply(&self, raster: &Raster) -> Raster;
}
