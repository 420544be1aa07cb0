//! Closed set of raster operations dispatched through one `apply`

use crate::generation::{Board, Flag, PatternGenerator, Rainbow};
use crate::io::error::{ProcessingError, Result, invalid_parameter};
use crate::raster::{Pixel, Raster};
use crate::transform::{
    ConvolutionFilter, ErrorDiffusionDither, LinearColorTransform, Mosaic, RasterTransform,
};
use std::str::FromStr;

/// Any of the pattern generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern {
    /// Board or checkerboard
    Board(Board),
    /// National flag
    Flag(Flag),
    /// Rainbow stripes
    Rainbow(Rainbow),
}

impl PatternGenerator for Pattern {
    fn dimensions(&self) -> (usize, usize) {
        match self {
            Self::Board(board) => board.dimensions(),
            Self::Flag(flag) => flag.dimensions(),
            Self::Rainbow(rainbow) => rainbow.dimensions(),
        }
    }

    fn color(&self, row: usize, col: usize) -> Pixel {
        match self {
            Self::Board(board) => board.color(row, col),
            Self::Flag(flag) => flag.color(row, col),
            Self::Rainbow(rainbow) => rainbow.color(row, col),
        }
    }
}

/// A single raster operation
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Per-pixel color matrix
    Transform(LinearColorTransform),
    /// Kernel convolution
    Filter(ConvolutionFilter),
    /// Black and white error diffusion
    Dither(ErrorDiffusionDither),
    /// Nearest-seed region averaging
    Mosaic(Mosaic),
    /// Procedural generation; ignores any input image
    Generate(Pattern),
}

impl Operation {
    /// Short name used in logs and error messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Transform(_) => "transform",
            Self::Filter(_) => "filter",
            Self::Dither(_) => "dither",
            Self::Mosaic(_) => "mosaic",
            Self::Generate(_) => "generate",
        }
    }

    /// Whether the operation reads an input image
    pub const fn needs_input(&self) -> bool {
        !matches!(self, Self::Generate(_))
    }

    /// Run the operation
    ///
    /// # Errors
    ///
    /// Returns `MissingImage` when a transform is given no input
    pub fn apply(&self, input: Option<&Raster>) -> Result<Raster> {
        let require = || {
            input.ok_or(ProcessingError::MissingImage {
                operation: self.name(),
            })
        };

        Ok(match self {
            Self::Transform(transform) => transform.apply(require()?),
            Self::Filter(filter) => filter.apply(require()?),
            Self::Dither(dither) => dither.apply(require()?),
            Self::Mosaic(mosaic) => mosaic.apply(require()?),
            Self::Generate(pattern) => pattern.generate(),
        })
    }
}

impl FromStr for Operation {
    type Err = ProcessingError;

    /// Parse a parameterless preset: `blur`, `sharpen`, `greyscale`, `sepiatone` or `dither`
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "blur" => Ok(Self::Filter(ConvolutionFilter::blur())),
            "sharpen" => Ok(Self::Filter(ConvolutionFilter::sharpen())),
            "greyscale" | "grayscale" => Ok(Self::Transform(LinearColorTransform::greyscale())),
            "sepiatone" | "sepia" => Ok(Self::Transform(LinearColorTransform::sepia())),
            "dither" => Ok(Self::Dither(ErrorDiffusionDither::new())),
            _ => Err(invalid_parameter(
                "operation",
                &s,
                &"expected blur, sharpen, greyscale, sepiatone or dither",
            )),
        }
    }
}
