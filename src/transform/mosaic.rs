//! Mosaic: flatten nearest-seed regions to their average color
//!
//! Seeds are sampled without replacement from the raster's cells, every pixel
//! joins the seed nearest to it by Manhattan distance, and each region is
//! repainted with the rounded mean of its members.

use crate::io::configuration::{CHANNELS, DEFAULT_SEED};
use crate::io::error::{Result, require_positive};
use crate::raster::{Pixel, Raster};
use crate::transform::RasterTransform;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

/// A seed coordinate inside the raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Seed {
    /// Create a seed at `(row, col)`
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance from this seed to `(row, col)`
    pub const fn distance_to(&self, row: usize, col: usize) -> usize {
        self.row.abs_diff(row) + self.col.abs_diff(col)
    }
}

/// A seed and the pixels closest to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// The seed this region grew from
    pub seed: Seed,
    /// Member coordinates as `(row, col)`, in raster-scan order
    pub members: Vec<(usize, usize)>,
}

impl Cluster {
    /// Per-channel mean of the members, rounded to the nearest integer
    ///
    /// Returns `None` for an empty cluster.
    pub fn average_color(&self, raster: &Raster) -> Option<Pixel> {
        if self.members.is_empty() {
            return None;
        }

        let mut sums = [0u64; CHANNELS];
        for &(row, col) in &self.members {
            let pixel = raster.pixel(row, col)?;
            for (sum, value) in sums.iter_mut().zip(pixel) {
                *sum += u64::from(value);
            }
        }

        let count = self.members.len() as f64;
        Some(sums.map(|sum| (sum as f64 / count).round() as u8))
    }
}

/// Nearest-seed region averaging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mosaic {
    requested_seeds: usize,
    rng_seed: u64,
}

impl Mosaic {
    /// Create a mosaic that draws `num_seeds + 1` seeds per raster
    ///
    /// # Errors
    ///
    /// Returns an error if `num_seeds` is zero or negative
    pub fn new(num_seeds: i64) -> Result<Self> {
        Ok(Self {
            requested_seeds: require_positive("seeds", num_seeds)?,
            rng_seed: DEFAULT_SEED,
        })
    }

    /// Use a different seed for the random seed draw
    #[must_use]
    pub const fn with_rng_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    /// Seed count the caller asked for
    pub const fn requested_seeds(&self) -> usize {
        self.requested_seeds
    }

    /// Seed used for the random draw in [`RasterTransform::apply`]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Number of seeds actually drawn for a raster of the given size
    ///
    /// One more than requested, never more than the number of cells.
    pub const fn effective_seed_count(&self, height: usize, width: usize) -> usize {
        let cells = height.saturating_mul(width);
        let wanted = self.requested_seeds.saturating_add(1);
        if wanted < cells { wanted } else { cells }
    }

    /// Sample distinct seed coordinates uniformly over the raster
    pub fn draw_seeds<R: Rng + ?Sized>(&self, height: usize, width: usize, rng: &mut R) -> Vec<Seed> {
        let count = self.effective_seed_count(height, width);
        rand::seq::index::sample(rng, height * width, count)
            .iter()
            .map(|index| Seed::new(index / width, index % width))
            .collect()
    }

    /// Assign every cell to its nearest seed
    ///
    /// Ties go to the seed that appears first in `seeds`. The returned clusters
    /// are in the same order as `seeds`.
    pub fn assign_clusters(height: usize, width: usize, seeds: &[Seed]) -> Vec<Cluster> {
        let mut clusters: Vec<Cluster> = seeds
            .iter()
            .map(|&seed| Cluster {
                seed,
                members: Vec::new(),
            })
            .collect();

        for row in 0..height {
            for col in 0..width {
                let nearest = seeds
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, seed)| seed.distance_to(row, col))
                    .map(|(index, _)| index);

                if let Some(cluster) = nearest.and_then(|index| clusters.get_mut(index)) {
                    cluster.members.push((row, col));
                }
            }
        }

        clusters
    }

    /// Run the mosaic with a caller-supplied random source
    pub fn apply_with_rng<R: Rng + ?Sized>(&self, raster: &Raster, rng: &mut R) -> Raster {
        let (height, width) = raster.dimensions();
        let seeds = self.draw_seeds(height, width, rng);
        debug!(
            height,
            width,
            requested = self.requested_seeds,
            drawn = seeds.len(),
            "Applying mosaic"
        );

        let clusters = Self::assign_clusters(height, width, &seeds);
        let mut output = raster.to_signed();

        for cluster in &clusters {
            let Some(color) = cluster.average_color(raster) else {
                continue;
            };
            for &(row, col) in &cluster.members {
                for (channel, value) in color.iter().enumerate() {
                    if let Some(slot) = output.get_mut((row, col, channel)) {
                        *slot = i32::from(*value);
                    }
                }
            }
        }

        Raster::from_unclamped(output)
    }
}

impl RasterTransform for Mosaic {
    fn apply(&self, raster: &Raster) -> Raster {
        let mut rng = StdRng::seed_from_u64(self.rng_seed);
        self.apply_with_rng(raster, &mut rng)
    }
}
