//! Processing constants and runtime configuration defaults

// Shared rounding threshold for the 1-bit quantizer
/// Channel values strictly above this become white during dithering
pub const DITHER_THRESHOLD: i32 = 128;

/// Upper bound of an 8-bit channel
pub const CHANNEL_MAX: i32 = 255;

/// Number of channels per pixel
pub const CHANNELS: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed side length for generated rasters
pub const MAX_RASTER_DIMENSION: usize = 10_000;

/// Number of stripes in a rainbow pattern
pub const RAINBOW_STRIPES: usize = 7;

/// Checkerboards are always this many squares per side
pub const CHECKERBOARD_SQUARES: usize = 8;

// Default values for configurable parameters
/// Fixed seed for reproducible mosaics
pub const DEFAULT_SEED: u64 = 42;

/// Default requested seed count for the mosaic operation
pub const DEFAULT_MOSAIC_SEEDS: usize = 500;

// Output settings
/// Separator between the input stem and the operation chain in output filenames
pub const OUTPUT_SEPARATOR: &str = "_";

/// File extensions accepted by the codec adapter
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
