//! Per-file outcome types collected for the run summary.
use std::path::PathBuf;

/// Outcome for one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Destination path.
    pub path: PathBuf,
    /// What happened to it.
    pub status: FileStatus,
}

/// Status of one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Written (created or overwritten).
    Written,
    /// Rendered only; `--dry-run` was set.
    DryRun,
    /// Writing failed.
    Failed,
}

impl FileStatus {
    /// Icon and ANSI colour used in the summary.
    pub(super) const fn marker(self) -> (&'static str, &'static str) {
        match self {
            Self::Written => ("✓", "\x1b[32m"),
            Self::DryRun => ("~", "\x1b[37m"),
            Self::Failed => ("✗", "\x1b[31m"),
        }
    }
}
