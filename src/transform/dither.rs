//! Error-diffusion dithering to pure black and white
//!
//! The raster is greyscaled, then every channel is thresholded in raster-scan
//! order. Each cell's quantization error is pushed into its not-yet-visited
//! neighbors:
//! - Right:        7/16
//! - Bottom:       5/16
//! - Bottom-left:  3/16
//! - Bottom-right: 1/16
//!
//! Later cells threshold the value left behind by earlier ones, so the scan
//! must run sequentially over a single buffer.

use crate::io::configuration::{CHANNEL_MAX, DITHER_THRESHOLD};
use crate::raster::Raster;
use crate::transform::RasterTransform;
use crate::transform::color::LinearColorTransform;
use ndarray::Array3;
use tracing::debug;

/// Neighbor offsets `(row delta, col delta, weight in sixteenths)`
const DIFFUSION: [(usize, isize, i32); 4] = [(0, 1, 7), (1, 0, 5), (1, -1, 3), (1, 1, 1)];

/// Greyscale followed by Floyd-Steinberg style error diffusion
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ErrorDiffusionDither;

impl ErrorDiffusionDither {
    /// Create a dither operation
    pub const fn new() -> Self {
        Self
    }
}

impl RasterTransform for ErrorDiffusionDither {
    fn apply(&self, raster: &Raster) -> Raster {
        let (height, width) = raster.dimensions();
        debug!(height, width, "Applying error diffusion dither");

        let mut buffer = LinearColorTransform::greyscale().apply(raster).to_signed();
        diffuse_errors(&mut buffer);

        Raster::from_unclamped(buffer)
    }
}

/// Threshold `buffer` in place, diffusing each cell's error forward
///
/// Cells not yet visited may hold values outside 0-255; they are only
/// thresholded when the scan reaches them. On return every element is 0 or 255.
pub fn diffuse_errors(buffer: &mut Array3<i32>) {
    let (height, width, channels) = buffer.dim();

    for row in 0..height {
        for col in 0..width {
            for channel in 0..channels {
                let Some(cell) = buffer.get_mut((row, col, channel)) else {
                    continue;
                };
                let old_value = *cell;
                let new_value = if old_value > DITHER_THRESHOLD {
                    CHANNEL_MAX
                } else {
                    0
                };
                *cell = new_value;

                let error = old_value - new_value;
                if error == 0 {
                    continue;
                }

                for &(row_delta, col_delta, weight) in &DIFFUSION {
                    let Some(target_col) = col.checked_add_signed(col_delta) else {
                        continue;
                    };
                    if let Some(neighbor) = buffer.get_mut((row + row_delta, target_col, channel))
                    {
                        *neighbor += error_share(error, weight);
                    }
                }
            }
        }
    }
}

/// Portion of `error` carried by a neighbor of the given weight, rounded half up
pub fn error_share(error: i32, weight: i32) -> i32 {
    (f64::from(weight * error) / 16.0 + 0.5).floor() as i32
}
