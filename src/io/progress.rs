//! Batch progress display for multi-file processing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many files of a batch have been processed
pub struct ProgressManager {
    bar: ProgressBar,
    completed: Vec<(String, Duration)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call `initialize` to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: Vec::new(),
        }
    }

    /// Show a bar sized for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
        self.completed.clear();
    }

    /// Show which file is being processed
    pub fn start_file(&self, path: &Path) {
        self.bar.set_message(display_name(path));
    }

    /// Mark a file as done and advance the bar
    pub fn complete_file(&mut self, path: &Path, elapsed: Duration) {
        self.completed.push((display_name(path), elapsed));
        self.bar.inc(1);
    }

    /// Files finished so far with their processing times
    pub fn completed(&self) -> &[(String, Duration)] {
        &self.completed
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
