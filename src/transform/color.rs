//! Linear color transforms
//!
//! Each output channel is a linear combination of the input pixel's red, green
//! and blue values: `out[c] = round(sum_k m[c][k] * in[k])`, clamped to 0-255.

use crate::io::error::{ProcessingError, Result};
use crate::raster::Raster;
use crate::raster::clamp::round_channel;
use crate::transform::RasterTransform;
use ndarray::{Array3, Axis, Zip};
use tracing::debug;

/// 3x3 matrix mapping `(r, g, b)` to `(r', g', b')`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    rows: [[f64; 3]; 3],
}

impl ColorMatrix {
    /// Rec. 709 luma weights copied to all three output channels
    pub const GREYSCALE: Self = Self {
        rows: [
            [0.2126, 0.7152, 0.0722],
            [0.2126, 0.7152, 0.0722],
            [0.2126, 0.7152, 0.0722],
        ],
    };

    /// Reddish-brown tone of early photographs
    pub const SEPIA: Self = Self {
        rows: [
            [0.393, 0.769, 0.189],
            [0.349, 0.686, 0.168],
            [0.272, 0.534, 0.131],
        ],
    };

    /// Create a matrix from rows of weights
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is NaN or infinite
    pub fn new(rows: [[f64; 3]; 3]) -> Result<Self> {
        for (r, row) in rows.iter().enumerate() {
            for (c, weight) in row.iter().enumerate() {
                if !weight.is_finite() {
                    return Err(ProcessingError::InvalidParameter {
                        parameter: "color_matrix",
                        value: format!("[{r}][{c}] = {weight}"),
                        reason: "weights must be finite".to_string(),
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// The matrix rows
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Map one pixel, rounding each channel but not clamping it
    // Sums stay unfused so exact halves (sepia blue on (100,150,200) is 133.5) round as written
    #[allow(clippy::suboptimal_flops)]
    pub fn map_pixel(&self, rgb: [i32; 3]) -> [i32; 3] {
        let [r, g, b] = rgb.map(f64::from);
        self.rows
            .map(|[kr, kg, kb]| round_channel(kr * r + kg * g + kb * b))
    }
}

/// Applies a `ColorMatrix` to every pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearColorTransform {
    matrix: ColorMatrix,
}

impl LinearColorTransform {
    /// Create a transform from an arbitrary matrix
    pub const fn new(matrix: ColorMatrix) -> Self {
        Self { matrix }
    }

    /// Luma greyscale
    pub const fn greyscale() -> Self {
        Self::new(ColorMatrix::GREYSCALE)
    }

    /// Sepia tone
    pub const fn sepia() -> Self {
        Self::new(ColorMatrix::SEPIA)
    }

    /// The matrix this transform applies
    pub const fn matrix(&self) -> &ColorMatrix {
        &self.matrix
    }
}

impl RasterTransform for LinearColorTransform {
    fn apply(&self, raster: &Raster) -> Raster {
        let (height, width) = raster.dimensions();
        debug!(height, width, "Applying linear color transform");

        let input = raster.to_signed();
        let mut output = Array3::<i32>::zeros(input.raw_dim());

        Zip::from(output.lanes_mut(Axis(2)))
            .and(input.lanes(Axis(2)))
            .for_each(|mut out, pixel| {
                let mut rgb = [0; 3];
                for (slot, value) in rgb.iter_mut().zip(pixel.iter()) {
                    *slot = *value;
                }
                for (slot, value) in out.iter_mut().zip(self.matrix.map_pixel(rgb)) {
                    *slot = value;
                }
            });

        Raster::from_unclamped(output)
    }
}
