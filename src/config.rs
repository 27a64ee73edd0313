//! Translator configuration.
//!
//! Read from TOML:
//!
//! ```toml
//! dialect = "postgres"
//!
//! [booleans]
//! enabled = true
//! columns = ["active", "enabled", "is_breached"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::ShiftResult;
use crate::rewrite::DEFAULT_BOOLEAN_COLUMNS;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "sqlshift.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Default dialect identifier for clause generation. Resolved
    /// permissively, like every other dialect identifier.
    pub dialect: Option<String>,
    pub booleans: BooleanConfig,
}

/// Boolean literal normalization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BooleanConfig {
    pub enabled: bool,
    /// Column name fragments marking a quoted identifier as boolean.
    pub columns: Vec<String>,
}

impl Default for BooleanConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            columns: DEFAULT_BOOLEAN_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TranslatorConfig {
    pub fn from_toml_str(content: &str) -> ShiftResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a config file. The file must exist.
    pub fn from_file(path: &Path) -> ShiftResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise the first discovered config file,
    /// otherwise the defaults.
    pub fn load(path: Option<&Path>) -> ShiftResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::discover() {
                Some(found) => Self::from_file(&found),
                None => Ok(Self::default()),
            },
        }
    }

    /// `./sqlshift.toml`, then `<config dir>/sqlshift/config.toml`.
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("sqlshift").join("config.toml"))
            .filter(|p| p.is_file())
    }

    pub fn dialect(&self) -> Dialect {
        Dialect::resolve(self.dialect.as_deref())
    }
}
