//! Host platform detection and RimWorld Mods directory resolution.
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::PlatformError;

/// Operating system family, as far as RimWorld's install layout cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Os {
    /// Windows; Mods live under `LocalLow`.
    Windows,
    /// macOS; Mods live under `Application Support`.
    MacOs,
    /// Linux; Mods live under Unity's `~/.config/unity3d`.
    Linux,
    /// Any other target; carries the raw identifier for error reporting.
    Other(String),
}

impl Os {
    /// Classify a raw `std::env::consts::OS` identifier.
    #[must_use]
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
            Self::Other(id) => write!(f, "{id}"),
        }
    }
}

/// Snapshot of the ambient platform state the resolver depends on.
///
/// Captured once at startup by [`Environment::detect`]; tests build it
/// directly so no real environment variables are touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Host operating system.
    pub os: Os,
    /// User home directory (`HOME`, falling back to `USERPROFILE`).
    pub home_dir: Option<PathBuf>,
    /// `APPDATA`; only read on Windows.
    pub app_data_dir: Option<PathBuf>,
}

impl Environment {
    /// Capture the current process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_lookup(
            Os::from_identifier(std::env::consts::OS),
            |name: &str| std::env::var_os(name),
        )
    }

    /// Build an environment for `os`, reading variables through `lookup`.
    ///
    /// Empty values count as unset. `APPDATA` is only consulted on Windows.
    #[must_use]
    pub fn from_lookup(os: Os, lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        let app_data_dir = if os == Os::Windows {
            var("APPDATA")
        } else {
            None
        };
        Self {
            home_dir: var("HOME").or_else(|| var("USERPROFILE")),
            os,
            app_data_dir,
        }
    }

    /// Return the default RimWorld Mods directory for this environment.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Unsupported`] for operating systems RimWorld
    /// does not ship on, and [`PlatformError::MissingEnvironment`] when the
    /// base directory variable for this platform is unset.
    pub fn mods_dir(&self) -> Result<PathBuf, PlatformError> {
        match &self.os {
            Os::Windows => {
                let app_data =
                    self.app_data_dir
                        .as_deref()
                        .ok_or(PlatformError::MissingEnvironment {
                            variable: "APPDATA",
                        })?;
                let app_data_root =
                    app_data
                        .parent()
                        .ok_or_else(|| PlatformError::NoAppDataParent {
                            app_data: app_data.to_path_buf(),
                        })?;
                Ok(app_data_root
                    .join("LocalLow")
                    .join("Ludeon Studios")
                    .join("RimWorld by Ludeon Studios")
                    .join("Mods"))
            }
            Os::MacOs => Ok(self
                .home()?
                .join("Library")
                .join("Application Support")
                .join("RimWorld")
                .join("Mods")),
            Os::Linux => Ok(self
                .home()?
                .join(".config")
                .join("unity3d")
                .join("Ludeon Studios")
                .join("RimWorld")
                .join("Mods")),
            Os::Other(id) => Err(PlatformError::Unsupported {
                platform: id.clone(),
            }),
        }
    }

    fn home(&self) -> Result<&Path, PlatformError> {
        self.home_dir
            .as_deref()
            .ok_or(PlatformError::MissingEnvironment { variable: "HOME" })
    }
}
