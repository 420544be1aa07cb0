//! Seven spectrum stripes, red first

use crate::generation::{PatternGenerator, validate_dimension};
use crate::io::configuration::RAINBOW_STRIPES;
use crate::io::error::{ProcessingError, Result, invalid_parameter};
use crate::raster::Pixel;
use std::str::FromStr;

/// Red, orange, yellow, green, blue, indigo, violet
pub const SPECTRUM: [Pixel; RAINBOW_STRIPES] = [
    [255, 0, 0],
    [255, 127, 0],
    [255, 255, 0],
    [0, 255, 0],
    [0, 0, 255],
    [75, 0, 130],
    [148, 0, 211],
];

const VIOLET: Pixel = [148, 0, 211];

/// Orientation of the stripes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Stripes run left to right, stacked down the rows
    Horizontal,
    /// Stripes run top to bottom, side by side across the columns
    Vertical,
}

impl FromStr for Direction {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Self::Horizontal),
            "v" | "vertical" => Ok(Self::Vertical),
            _ => Err(invalid_parameter("direction", &s, &"expected h or v")),
        }
    }
}

/// Rainbow stripe generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rainbow {
    height: usize,
    width: usize,
    direction: Direction,
}

impl Rainbow {
    /// Create a rainbow of the given size and orientation
    ///
    /// # Errors
    ///
    /// Returns an error if the height or width is non-positive or too large
    pub fn new(height: i64, width: i64, direction: Direction) -> Result<Self> {
        Ok(Self {
            height: validate_dimension("height", height)?,
            width: validate_dimension("width", width)?,
            direction,
        })
    }

    /// Stripe orientation
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Thickness of one stripe: a seventh of the striped dimension, at least one
    pub fn stripe_width(&self) -> usize {
        let dimension = match self.direction {
            Direction::Horizontal => self.height,
            Direction::Vertical => self.width,
        };
        ((dimension as f64 / RAINBOW_STRIPES as f64).round() as usize).max(1)
    }
}

impl PatternGenerator for Rainbow {
    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn color(&self, row: usize, col: usize) -> Pixel {
        let position = match self.direction {
            Direction::Horizontal => row,
            Direction::Vertical => col,
        };
        // Rounding can leave a remainder past the seventh stripe; it stays violet
        SPECTRUM
            .get(position / self.stripe_width())
            .copied()
            .unwrap_or(VIOLET)
    }
}
