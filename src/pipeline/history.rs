//! Editing session with snapshot-and-replace history
//!
//! Every change records a full raster snapshot. Undo and redo move a cursor
//! over the record; recording a new snapshot after an undo discards the
//! snapshots that could have been redone.

use crate::io::error::{ProcessingError, Result};
use crate::pipeline::operation::Operation;
use crate::raster::Raster;
use tracing::debug;

/// The current image and every snapshot that led to it
#[derive(Debug, Clone, Default)]
pub struct Session {
    snapshots: Vec<Raster>,
    cursor: Option<usize>,
}

impl Session {
    /// Create an empty session with no image
    pub const fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
        }
    }

    /// Make `raster` the current image, dropping anything that could be redone
    pub fn set_image(&mut self, raster: Raster) {
        let keep = self.cursor.map_or(0, |index| index + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(raster);
        self.cursor = Some(self.snapshots.len() - 1);
        debug!(snapshots = self.snapshots.len(), "Recorded snapshot");
    }

    /// Run `operation` on the current image and record the result
    ///
    /// # Errors
    ///
    /// Returns `MissingImage` if the operation needs an input and none is loaded
    pub fn apply(&mut self, operation: &Operation) -> Result<&Raster> {
        let input = self.current();
        let output = operation.apply(input)?;
        self.set_image(output);
        self.image()
    }

    /// The current image
    ///
    /// # Errors
    ///
    /// Returns `MissingImage` if nothing has been loaded or generated yet
    pub fn image(&self) -> Result<&Raster> {
        self.current()
            .ok_or(ProcessingError::MissingImage { operation: "image" })
    }

    /// Step back to the previous snapshot
    ///
    /// # Errors
    ///
    /// Returns a history error when already at the first snapshot
    pub fn undo(&mut self) -> Result<&Raster> {
        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                self.image()
            }
            _ => Err(ProcessingError::History {
                reason: "no operation to undo",
            }),
        }
    }

    /// Step forward to the snapshot most recently undone
    ///
    /// # Errors
    ///
    /// Returns a history error when nothing has been undone
    pub fn redo(&mut self) -> Result<&Raster> {
        match self.cursor {
            Some(index) if index + 1 < self.snapshots.len() => {
                self.cursor = Some(index + 1);
                self.image()
            }
            _ => Err(ProcessingError::History {
                reason: "no operation to redo",
            }),
        }
    }

    /// Whether `undo` would succeed
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|index| index > 0)
    }

    /// Whether `redo` would succeed
    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|index| index + 1 < self.snapshots.len())
    }

    /// Number of recorded snapshots, including any that could be redone
    pub const fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no image has been recorded yet
    pub const fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn current(&self) -> Option<&Raster> {
        self.cursor.and_then(|index| self.snapshots.get(index))
    }
}
