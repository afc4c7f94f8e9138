//! Fixed metadata values stamped into every generated mod.
//!
//! The defaults reproduce the stock `About.xml`; an optional TOML file can
//! override any subset of them:
//!
//! ```toml
//! author = "Tynan"
//! package_prefix = "com.ludeon"
//! supported_versions = ["1.4", "1.5"]
//! default_interval = 12
//! ```
use std::num::NonZeroU32;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::request::DEFAULT_INTERVAL;

/// Values substituted into the generated files that do not come from the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModTemplate {
    /// `<author>` field.
    pub author: String,
    /// `<description>` field.
    pub description: String,
    /// Prefix joined to the derived id with a `.` to form `<packageId>`.
    pub package_prefix: String,
    /// One `<li>` per entry under `<supportedVersions>`.
    pub supported_versions: Vec<String>,
    /// Interval used for entries given without `:HOURS`.
    pub default_interval: u32,
}

impl Default for ModTemplate {
    fn default() -> Self {
        Self {
            author: "YourName".to_string(),
            description: "Auto-generated mod that adds nuzzling behavior to animals.".to_string(),
            package_prefix: "com.yourname".to_string(),
            supported_versions: vec!["1.5".to_string()],
            default_interval: DEFAULT_INTERVAL.get(),
        }
    }
}

impl ModTemplate {
    /// Load overrides from `path`, or return the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, has
    /// unknown keys, or sets `default_interval` to zero.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse overrides from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML for this schema or
    /// sets `default_interval` to zero.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let template: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.message().to_string(),
        })?;
        template.interval()?;
        Ok(template)
    }

    /// The default interval as a validated [`NonZeroU32`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDefaultInterval`] when it is zero.
    pub fn interval(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.default_interval).ok_or(ConfigError::InvalidDefaultInterval)
    }
}
