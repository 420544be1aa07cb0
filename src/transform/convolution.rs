//! Kernel convolution over each channel
//!
//! The kernel is centered on each output pixel. Source positions that fall
//! outside the raster contribute nothing, and the kernel is not renormalized,
//! so borders of positive-sum kernels come out darker than the interior.

use crate::io::configuration::CHANNELS;
use crate::io::error::{ProcessingError, Result, invalid_parameter};
use crate::raster::Raster;
use crate::raster::clamp::round_channel;
use crate::transform::RasterTransform;
use ndarray::{Array2, Array3, arr2};
use tracing::debug;

/// Square, odd-sized matrix of finite weights
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Array2<f64>,
}

impl Kernel {
    /// Create a kernel from rows of weights
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The kernel is empty or not square
    /// - The side length is even
    /// - Any weight is NaN or infinite
    pub fn new(rows: &[Vec<f64>]) -> Result<Self> {
        let side = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != side) {
            return Err(invalid_parameter(
                "kernel",
                &format!("{side}x{}", row.len()),
                &"kernel must be square",
            ));
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let weights = Array2::from_shape_vec((side, side), flat).map_err(|e| {
            invalid_parameter("kernel", &format!("{side}x{side}"), &e)
        })?;

        Self::from_array(weights)
    }

    /// Create a kernel from a square array
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Kernel::new`]
    pub fn from_array(weights: Array2<f64>) -> Result<Self> {
        let (rows, cols) = weights.dim();

        if rows != cols {
            return Err(invalid_parameter(
                "kernel",
                &format!("{rows}x{cols}"),
                &"kernel must be square",
            ));
        }
        if rows % 2 == 0 {
            return Err(invalid_parameter(
                "kernel",
                &format!("{rows}x{cols}"),
                &"side length must be odd and non-zero",
            ));
        }
        if let Some(((r, c), weight)) = weights.indexed_iter().find(|(_, w)| !w.is_finite()) {
            return Err(ProcessingError::InvalidParameter {
                parameter: "kernel",
                value: format!("[{r}][{c}] = {weight}"),
                reason: "weights must be finite".to_string(),
            });
        }

        Ok(Self { weights })
    }

    /// 3x3 Gaussian blur
    pub fn blur() -> Self {
        Self {
            weights: arr2(&[
                [0.0625, 0.125, 0.0625],
                [0.125, 0.25, 0.125],
                [0.0625, 0.125, 0.0625],
            ]),
        }
    }

    /// 5x5 sharpen: negative outer ring, positive inner ring, unit center
    pub fn sharpen() -> Self {
        Self {
            weights: arr2(&[
                [-0.125, -0.125, -0.125, -0.125, -0.125],
                [-0.125, 0.25, 0.25, 0.25, -0.125],
                [-0.125, 0.25, 1.0, 0.25, -0.125],
                [-0.125, 0.25, 0.25, 0.25, -0.125],
                [-0.125, -0.125, -0.125, -0.125, -0.125],
            ]),
        }
    }

    /// Side length
    pub fn side(&self) -> usize {
        self.weights.nrows()
    }

    /// Distance from the center to an edge of the kernel
    pub fn offset(&self) -> usize {
        (self.side() - 1) / 2
    }

    /// The weight matrix
    pub const fn weights(&self) -> &Array2<f64> {
        &self.weights
    }
}

/// Convolves every channel of a raster with a kernel
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionFilter {
    kernel: Kernel,
}

impl ConvolutionFilter {
    /// Create a filter around a kernel
    pub const fn new(kernel: Kernel) -> Self {
        Self { kernel }
    }

    /// Gaussian blur filter
    pub fn blur() -> Self {
        Self::new(Kernel::blur())
    }

    /// Sharpen filter
    pub fn sharpen() -> Self {
        Self::new(Kernel::sharpen())
    }

    /// The kernel this filter applies
    pub const fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    // Sums one output pixel; positions off the raster are skipped
    #[allow(clippy::suboptimal_flops)]
    fn convolve_at(&self, input: &Array3<i32>, row: usize, col: usize) -> [f64; CHANNELS] {
        let offset = self.kernel.offset();
        let mut sums = [0.0; CHANNELS];

        for ((u, v), &weight) in self.kernel.weights.indexed_iter() {
            let (Some(src_row), Some(src_col)) =
                ((row + u).checked_sub(offset), (col + v).checked_sub(offset))
            else {
                continue;
            };

            for (channel, sum) in sums.iter_mut().enumerate() {
                if let Some(&value) = input.get((src_row, src_col, channel)) {
                    *sum += f64::from(value) * weight;
                }
            }
        }

        sums
    }
}

impl RasterTransform for ConvolutionFilter {
    fn apply(&self, raster: &Raster) -> Raster {
        let (height, width) = raster.dimensions();
        debug!(
            height,
            width,
            kernel = self.kernel.side(),
            "Applying convolution filter"
        );

        let input = raster.to_signed();
        let mut output = Array3::<i32>::zeros(input.raw_dim());

        for row in 0..height {
            for col in 0..width {
                let sums = self.convolve_at(&input, row, col);
                for (channel, sum) in sums.iter().enumerate() {
                    if let Some(slot) = output.get_mut((row, col, channel)) {
                        *slot = round_channel(*sum);
                    }
                }
            }
        }

        Raster::from_unclamped(output)
    }
}
