//! Operation dispatch and editing sessions built on the pure transforms

/// Snapshot history with undo and redo
pub mod history;
/// The closed set of operations and their shared `apply`
pub mod operation;

pub use history::Session;
pub use operation::{Operation, Pattern};
