//! Codec adapter between image files and rasters
//!
//! Decoding and encoding are delegated to the `image` crate; the container
//! format follows the file extension. Alpha is discarded on load.

use crate::generation::BLACK;
use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{ProcessingError, Result};
use crate::raster::Raster;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;
use tracing::info;

/// Whether the path carries one of the supported image extensions
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// Convert a decoded RGB image to a raster
///
/// # Errors
///
/// Returns an error if the image has a zero dimension
pub fn raster_from_rgb(img: &RgbImage) -> Result<Raster> {
    let (width, height) = img.dimensions();
    Raster::from_fn(height as usize, width as usize, |row, col| {
        img.get_pixel_checked(col as u32, row as u32)
            .map_or(BLACK, |pixel| pixel.0)
    })
}

/// Convert a raster to an RGB image buffer
pub fn raster_to_rgb(raster: &Raster) -> RgbImage {
    let (height, width) = raster.dimensions();
    ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        Rgb(raster.pixel(y as usize, x as usize).unwrap_or(BLACK))
    })
}

/// Decode an image file into a raster
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a decodable image
/// - The decoded image is empty
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| ProcessingError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let raster = raster_from_rgb(&img.to_rgb8())?;

    info!(
        path = %path.display(),
        height = raster.height(),
        width = raster.width(),
        "Loaded image"
    );
    Ok(raster)
}

/// Encode a raster to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The extension is unknown or encoding fails
pub fn save_raster<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ProcessingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    raster_to_rgb(raster)
        .save(path)
        .map_err(|e| ProcessingError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!(path = %path.display(), "Saved image");
    Ok(())
}
