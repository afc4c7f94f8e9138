//! Write the rendered mod files into place.
//!
//! ```text
//! <root>/<TargetName>/
//! ├── About/About.xml
//! └── Patches/NuzzlePatches.xml
//! ```
//!
//! Each file is rendered fully in memory and then replaced atomically: the
//! content goes to a temporary file in the destination directory which is
//! renamed over the target. A failure on the second file leaves the first in
//! place. A replaced file keeps its previous permissions; a new one gets
//! `0o644` on unix.
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::config::ModTemplate;
use crate::error::WriteError;
use crate::logging::{FileStatus, Logger};
use crate::render;
use crate::request::Request;

/// Paths of the generated files for one mod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModLayout {
    /// `<root>/<TargetName>`.
    pub mod_dir: PathBuf,
    /// `<mod_dir>/About/About.xml`.
    pub about: PathBuf,
    /// `<mod_dir>/Patches/NuzzlePatches.xml`.
    pub patches: PathBuf,
}

impl ModLayout {
    /// Compute the layout for `target` under the Mods directory `root`.
    #[must_use]
    pub fn new(root: &Path, target: &str) -> Self {
        let mod_dir = root.join(target);
        Self {
            about: mod_dir.join("About").join("About.xml"),
            patches: mod_dir.join("Patches").join("NuzzlePatches.xml"),
            mod_dir,
        }
    }
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Destination path.
    pub path: PathBuf,
    /// Full file content.
    pub content: String,
}

/// Render both files for `request` without touching the disk.
#[must_use]
pub fn render_mod(
    layout: &ModLayout,
    request: &Request,
    template: &ModTemplate,
) -> [RenderedFile; 2] {
    [
        RenderedFile {
            path: layout.about.clone(),
            content: render::about_xml(&request.target, template),
        },
        RenderedFile {
            path: layout.patches.clone(),
            content: render::patch_xml(&request.entries),
        },
    ]
}

/// Render and write the mod for `request` under `root`.
///
/// With `dry_run` set, the files are rendered and reported but nothing is
/// created on disk.
///
/// # Errors
///
/// Returns [`WriteError`] if a directory cannot be created or a file cannot
/// be written. Files written before the failure are left in place.
pub fn emit_mod(
    root: &Path,
    request: &Request,
    template: &ModTemplate,
    dry_run: bool,
    log: &Logger,
) -> Result<ModLayout, WriteError> {
    let layout = ModLayout::new(root, &request.target);

    if render::package_id(&request.target).is_empty() {
        log.warn(&format!(
            "mod name '{}' has no characters usable in a package id",
            request.target
        ));
    }

    for file in render_mod(&layout, request, template) {
        if dry_run {
            log.dry_run(&format!(
                "would write {} ({} bytes)",
                file.path.display(),
                file.content.len()
            ));
            log.record_file(&file.path, FileStatus::DryRun);
            continue;
        }
        match write_atomic(&file.path, file.content.as_bytes()) {
            Ok(()) => {
                log.debug(&format!("wrote {}", file.path.display()));
                log.record_file(&file.path, FileStatus::Written);
            }
            Err(e) => {
                log.record_file(&file.path, FileStatus::Failed);
                return Err(e);
            }
        }
    }

    Ok(layout)
}

/// Replace `path` with `content` in one rename, creating parent directories
/// as needed.
///
/// # Errors
///
/// Returns [`WriteError::CreateDir`] if the parent cannot be created and
/// [`WriteError::File`] if the temporary file cannot be written or renamed.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<(), WriteError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    let file_err = |source| WriteError::File {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".nuzzle-gen")
        .tempfile_in(parent)
        .map_err(file_err)?;
    tmp.write_all(content).map_err(file_err)?;
    tmp.flush().map_err(file_err)?;
    keep_permissions(tmp.as_file(), path).map_err(file_err)?;
    tmp.persist(path).map_err(|e| file_err(e.error))?;
    Ok(())
}

/// Give `file` the permissions of the file at `path`, or `0o644` when there
/// is nothing to replace yet.
#[cfg(unix)]
fn keep_permissions(file: &std::fs::File, path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt as _;
    let perms = std::fs::metadata(path)
        .map_or_else(|_| std::fs::Permissions::from_mode(0o644), |m| m.permissions());
    file.set_permissions(perms)
}

/// Give `file` the permissions of the file at `path`, if there is one.
#[cfg(not(unix))]
fn keep_permissions(file: &std::fs::File, path: &Path) -> std::io::Result<()> {
    std::fs::metadata(path).map_or(Ok(()), |meta| file.set_permissions(meta.permissions()))
}
