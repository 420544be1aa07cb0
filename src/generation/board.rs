//! Alternating black and white squares

use crate::generation::{BLACK, PatternGenerator, WHITE, validate_dimension};
use crate::io::configuration::CHECKERBOARD_SQUARES;
use crate::io::error::{Result, invalid_parameter, require_positive};
use crate::raster::Pixel;

/// Board of `size x size` squares, white in the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    size: usize,
}

impl Board {
    /// Create a board of the given dimensions and square size
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-positive or the square size is
    /// larger than the height or width
    pub fn new(height: i64, width: i64, size: i64) -> Result<Self> {
        let height = validate_dimension("height", height)?;
        let width = validate_dimension("width", width)?;
        let square = require_positive("size", size)?;

        if square > height || square > width {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("square does not fit a {height}x{width} board"),
            ));
        }

        Ok(Self {
            height,
            width,
            size: square,
        })
    }

    /// Standard 8x8 checkerboard with squares of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is non-positive or the board would exceed the
    /// allocation limit
    pub fn checkerboard(size: i64) -> Result<Self> {
        require_positive("size", size)?;
        let side = size.saturating_mul(CHECKERBOARD_SQUARES as i64);
        Self::new(side, side, size)
    }

    /// Side length of one square
    pub const fn square_size(&self) -> usize {
        self.size
    }
}

impl PatternGenerator for Board {
    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn color(&self, row: usize, col: usize) -> Pixel {
        if (row / self.size + col / self.size) % 2 == 0 {
            WHITE
        } else {
            BLACK
        }
    }
}
