//! Pixel transforms and procedural pattern generation for 24-bit raster images
//!
//! The core maps rasters to rasters (color matrices, convolution, dithering,
//! mosaics) or builds them from closed-form color rules (boards, flags,
//! rainbows). Everything in the core is a pure function of its inputs; file
//! decoding, scripting and the command line live in [`io`].

#![forbid(unsafe_code)]

/// Procedural pattern generators
pub mod generation;
/// Input/output operations, configuration and error handling
pub mod io;
/// Operation dispatch and undo/redo sessions
pub mod pipeline;
/// The shared raster type and channel clamping
pub mod raster;
/// Raster-to-raster transforms
pub mod transform;

pub use io::error::{ProcessingError, Result};
pub use raster::{Pixel, Raster};
