//! Domain-specific error types for the mod generator.
//!
//! Each stage returns its own typed error ([`RequestError`],
//! [`PlatformError`], [`WriteError`], [`ConfigError`]), lifted into
//! [`NuzzleError`] with `?`. The binary converts that to [`anyhow::Error`]
//! to print the full source chain.
//!
//! # Error hierarchy
//!
//! ```text
//! NuzzleError
//! ├── Request(RequestError)   - target / entry token parsing
//! ├── Platform(PlatformError) - Mods directory resolution
//! ├── Write(WriteError)       - directory and file creation
//! └── Config(ConfigError)     - template override file
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the generator.
#[derive(Error, Debug)]
pub enum NuzzleError {
    /// The command line could not be turned into a generation request.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The output directory could not be resolved for this host.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// A directory or file could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),

    /// The template override file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while parsing the target name and entry tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No target (mod) name was given, or it was empty.
    #[error("missing target mod name")]
    MissingTarget,

    /// A target name was given but no entries followed it.
    #[error("no entries given for mod '{target}'")]
    NoEntries {
        /// The target name that was supplied.
        target: String,
    },

    /// An entry token had nothing before its `:`.
    #[error("entry '{token}' has an empty name")]
    EmptyEntryName {
        /// The raw token as supplied.
        token: String,
    },

    /// An entry's interval was not a positive integer that fits in `u32`.
    #[error(
        "invalid interval '{value}' for entry '{name}': expected a positive integer no greater than {}",
        u32::MAX
    )]
    InvalidInterval {
        /// Entry name the interval belonged to.
        name: String,
        /// The raw interval text.
        value: String,
    },
}

impl RequestError {
    /// Whether the usage string should accompany this error.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::MissingTarget | Self::NoEntries { .. })
    }
}

/// Errors raised while resolving the default Mods directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The host operating system has no known Mods location.
    #[error("unsupported platform '{platform}'")]
    Unsupported {
        /// Raw platform identifier (e.g. `"freebsd"`).
        platform: String,
    },

    /// An environment variable needed to build the path is unset or empty.
    #[error("environment variable {variable} is not set")]
    MissingEnvironment {
        /// Name of the variable (e.g. `"APPDATA"`).
        variable: &'static str,
    },

    /// `APPDATA` has no parent directory to hang `LocalLow` off.
    #[error("cannot derive LocalLow from APPDATA '{}'", .app_data.display())]
    NoAppDataParent {
        /// The `APPDATA` value that was read.
        app_data: PathBuf,
    },
}

/// Errors raised while writing the generated files.
#[derive(Error, Debug)]
pub enum WriteError {
    /// A destination directory could not be created.
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A file could not be written or moved into place.
    #[error("failed to write {}", .path.display())]
    File {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors raised while loading template overrides.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}", .path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the template schema.
    #[error("invalid config file {}: {message}", .path.display())]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// `default_interval` was set to zero.
    #[error("default_interval must be a positive integer")]
    InvalidDefaultInterval,
}
