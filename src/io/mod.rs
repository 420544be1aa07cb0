//! Everything outside the pure core: codecs, scripts, the command line, and
//! the configuration and error types shared by the whole crate

/// Command-line interface and batch file processing
pub mod cli;
/// Named constants and defaults
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Image file decoding and encoding
pub mod image;
/// Batch progress display
pub mod progress;
/// Command script parsing and execution
pub mod script;
