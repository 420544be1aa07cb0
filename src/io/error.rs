//! Error types for raster construction, transforms and the file shell around them

use std::fmt;
use std::path::PathBuf;

/// Main error type for all raster operations
#[derive(Debug)]
pub enum ProcessingError {
    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Construction parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Pixel data is empty, ragged, or has the wrong channel depth
    MalformedRaster {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// A channel value lies outside 0-255
    ChannelOutOfRange {
        /// Row of the offending pixel
        row: usize,
        /// Column of the offending pixel
        col: usize,
        /// Channel index (0 = red, 1 = green, 2 = blue)
        channel: usize,
        /// Rejected value
        value: i32,
    },

    /// An operation that needs an input image was run without one
    MissingImage {
        /// Operation that required the image
        operation: &'static str,
    },

    /// Undo or redo requested with no snapshot to move to
    History {
        /// Which navigation failed and why
        reason: &'static str,
    },

    /// A script line could not be parsed
    Script {
        /// 1-based line number in the script
        line: usize,
        /// Description of the parse failure
        reason: String,
    },
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedRaster { reason } => {
                write!(f, "Malformed raster: {reason}")
            }
            Self::ChannelOutOfRange {
                row,
                col,
                channel,
                value,
            } => {
                write!(
                    f,
                    "Channel {channel} of pixel ({row}, {col}) is {value}, expected 0-255"
                )
            }
            Self::MissingImage { operation } => {
                write!(f, "No image loaded for operation '{operation}'")
            }
            Self::History { reason } => {
                write!(f, "History error: {reason}")
            }
            Self::Script { line, reason } => {
                write!(f, "Script error on line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for raster results
pub type Result<T> = std::result::Result<T, ProcessingError>;

impl From<std::io::Error> for ProcessingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ProcessingError {
    ProcessingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a script parse error for the given 1-based line
pub fn script_error(line: usize, reason: &impl ToString) -> ProcessingError {
    ProcessingError::Script {
        line,
        reason: reason.to_string(),
    }
}

/// Reject non-positive values for a named construction parameter
///
/// # Errors
///
/// Returns `InvalidParameter` when `value` is zero or negative
pub fn require_positive(parameter: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    usize::try_from(value).map_err(|e| invalid_parameter(parameter, &value, &e))
}
