//! Structured logger with dry-run awareness and a per-file summary.
use std::path::Path;
use std::sync::Mutex;

use super::types::{FileEntry, FileStatus};

/// Logging facade used by the generator stages.
///
/// Messages are emitted as [`tracing`] events; the formatting and routing to
/// stdout/stderr is done by [`init_subscriber`](super::subscriber::init_subscriber).
/// File outcomes are collected for [`print_summary`](Self::print_summary).
#[derive(Debug, Default)]
pub struct Logger {
    files: Mutex<Vec<FileEntry>>,
}

impl Logger {
    /// Create a logger with an empty file list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header.
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "nuzzle_gen::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (shown only with `--verbose`).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: "nuzzle_gen::dry_run", "{msg}");
    }

    /// Record the outcome for one generated file.
    pub fn record_file(&self, path: &Path, status: FileStatus) {
        if let Ok(mut guard) = self.files.lock() {
            guard.push(FileEntry {
                path: path.to_path_buf(),
                status,
            });
        }
    }

    /// Return a copy of all recorded file outcomes.
    #[must_use]
    pub fn file_entries(&self) -> Vec<FileEntry> {
        self.files.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Count the files actually written to disk.
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.files.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|f| f.status == FileStatus::Written)
                .count()
        })
    }

    /// Print the closing confirmation: one line per file, relative to
    /// `mod_dir`, then a completion line naming the destination.
    pub fn print_summary(&self, mod_dir: &Path) {
        let files = self.file_entries();
        if files.is_empty() {
            return;
        }

        self.stage("Summary");
        for file in &files {
            let (icon, color) = file.status.marker();
            let shown = file.path.strip_prefix(mod_dir).unwrap_or(file.path.as_path());
            self.info(&format!("{color}{icon} {}\x1b[0m", shown.display()));
        }

        let written = self.written_count();
        if files.iter().all(|f| f.status == FileStatus::DryRun) {
            self.info(&format!(
                "dry run: {} files would be written to {}",
                files.len(),
                mod_dir.display()
            ));
        } else if written == files.len() {
            self.info(&format!(
                "\x1b[32mdone\x1b[0m: {written} files written to {}",
                mod_dir.display()
            ));
        } else {
            self.warn(&format!(
                "incomplete: {written} of {} files written to {}",
                files.len(),
                mod_dir.display()
            ));
        }
    }
}
