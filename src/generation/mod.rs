//! Procedural raster generators
//!
//! Every generator is a closed-form color rule evaluated at each cell by the
//! same row-major scan. Parameters are validated when the generator is built,
//! so generation itself cannot fail.

use crate::io::configuration::MAX_RASTER_DIMENSION;
use crate::io::error::{Result, invalid_parameter, require_positive};
use crate::raster::{Pixel, Raster};

/// Black and white squares
pub mod board;
/// National flags with fixed proportions
pub mod flag;
/// Seven-color spectrum stripes
pub mod rainbow;

pub use board::Board;
pub use flag::{Country, Flag};
pub use rainbow::{Direction, Rainbow};

/// Pure white
pub const WHITE: Pixel = [255, 255, 255];
/// Pure black
pub const BLACK: Pixel = [0, 0, 0];

/// A raster described by a per-cell color rule
pub trait PatternGenerator {
    /// Output size as `(height, width)`
    fn dimensions(&self) -> (usize, usize);

    /// Color of the cell at `(row, col)`
    fn color(&self, row: usize, col: usize) -> Pixel;

    /// Evaluate the color rule over every cell
    fn generate(&self) -> Raster {
        let (height, width) = self.dimensions();
        Raster::scan(height, width, |row, col| self.color(row, col))
    }
}

/// Validate one requested side length
///
/// # Errors
///
/// Returns an error if the value is non-positive or exceeds the allocation limit
pub fn validate_dimension(parameter: &'static str, value: i64) -> Result<usize> {
    let side = require_positive(parameter, value)?;
    if side > MAX_RASTER_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_RASTER_DIMENSION}"),
        ));
    }
    Ok(side)
}
