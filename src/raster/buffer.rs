//! Raster storage with validated construction
//!
//! A raster is a non-empty `height x width x 3` grid of 8-bit channels. Every
//! public constructor validates its input, so any `Raster` value is rectangular,
//! non-empty and in range. Transforms never mutate a raster; they build a new one.

use crate::io::configuration::{CHANNEL_MAX, CHANNELS};
use crate::io::error::{ProcessingError, Result};
use crate::raster::clamp::clamp_in_place;
use ndarray::Array3;

/// One RGB color
pub type Pixel = [u8; 3];

/// Rectangular grid of 3-channel 8-bit pixels, indexed `(row, col, channel)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: Array3<u8>,
}

impl Raster {
    /// Build a raster from rows of integer RGB triples
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no rows, or the first row is empty
    /// - Any row has a different length from the first
    /// - Any channel value lies outside 0-255
    pub fn from_rows(rows: &[Vec<[i32; 3]>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ProcessingError::MalformedRaster {
                reason: format!(
                    "row {index} has {} columns, expected {width}",
                    row.len()
                ),
            });
        }

        let flat: Vec<i32> = rows
            .iter()
            .flat_map(|row| row.iter().flat_map(|pixel| pixel.iter().copied()))
            .collect();
        let values = Array3::from_shape_vec((height, width, CHANNELS), flat).map_err(|e| {
            ProcessingError::MalformedRaster {
                reason: e.to_string(),
            }
        })?;

        Self::from_array(&values)
    }

    /// Build a raster from a `(height, width, 3)` array of integer channels
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either spatial dimension is zero
    /// - The channel axis is not exactly 3 deep
    /// - Any channel value lies outside 0-255; values are never clamped here
    pub fn from_array(values: &Array3<i32>) -> Result<Self> {
        let (height, width, depth) = values.dim();

        if height == 0 || width == 0 {
            return Err(ProcessingError::MalformedRaster {
                reason: format!("dimensions must be positive, got {height}x{width}"),
            });
        }
        if depth != CHANNELS {
            return Err(ProcessingError::MalformedRaster {
                reason: format!("expected {CHANNELS} channels, got {depth}"),
            });
        }

        if let Some(((row, col, channel), &value)) = values
            .indexed_iter()
            .find(|(_, v)| !(0..=CHANNEL_MAX).contains(*v))
        {
            return Err(ProcessingError::ChannelOutOfRange {
                row,
                col,
                channel,
                value,
            });
        }

        Ok(Self {
            pixels: values.mapv(|v| v as u8),
        })
    }

    /// Build a raster by evaluating `color` at every `(row, col)` in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn from_fn<F>(height: usize, width: usize, color: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        if height == 0 || width == 0 {
            return Err(ProcessingError::MalformedRaster {
                reason: format!("dimensions must be positive, got {height}x{width}"),
            });
        }

        Ok(Self::scan(height, width, color))
    }

    /// Row-major scan shared by `from_fn` and the pattern generators
    ///
    /// Callers guarantee both dimensions are positive.
    pub(crate) fn scan<F>(height: usize, width: usize, mut color: F) -> Self
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let mut pixels = Array3::zeros((height, width, CHANNELS));
        for row in 0..height {
            for col in 0..width {
                let rgb = color(row, col);
                for (channel, value) in rgb.iter().enumerate() {
                    if let Some(slot) = pixels.get_mut((row, col, channel)) {
                        *slot = *value;
                    }
                }
            }
        }

        Self { pixels }
    }

    /// Build a raster where every pixel has the same color
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(height: usize, width: usize, color: Pixel) -> Result<Self> {
        Self::from_fn(height, width, |_, _| color)
    }

    /// Clamp unclamped channel sums into a raster
    ///
    /// Callers guarantee the shape came from an existing raster.
    pub(crate) fn from_unclamped(mut values: Array3<i32>) -> Self {
        clamp_in_place(&mut values);
        Self {
            pixels: values.mapv(|v| v as u8),
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Dimensions as `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        let (height, width, _) = self.pixels.dim();
        (height, width)
    }

    /// Color at `(row, col)`, or `None` when outside the raster
    pub fn pixel(&self, row: usize, col: usize) -> Option<Pixel> {
        Some([
            *self.pixels.get((row, col, 0))?,
            *self.pixels.get((row, col, 1))?,
            *self.pixels.get((row, col, 2))?,
        ])
    }

    /// Borrow the underlying `(height, width, 3)` array
    pub const fn as_array(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Widen every channel to `i32` for arithmetic that may leave 0-255
    pub fn to_signed(&self) -> Array3<i32> {
        self.pixels.mapv(i32::from)
    }

    /// Copy the pixels out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| self.pixel(row, col).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
