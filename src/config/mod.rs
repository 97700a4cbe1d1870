//! TOML configuration: host identity, file layout and retention, remote threshold.

mod structs;

pub use structs::{FileConfig, GeneralConfig, RemoteConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Every field has a default, so an empty or missing file still yields a working logger.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub file: FileConfig,
    pub remote: RemoteConfig,
}

impl Config {
    /// Loads from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file is not valid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Read failures other than "not found", and TOML syntax or type errors.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/daqlog/daqlog.toml`
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("daqlog").join("daqlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown names fall back to [`Level::Message`].
    #[must_use]
    pub fn parse_verbosity(&self) -> Level {
        self.general.verbosity.parse().unwrap_or(Level::Message)
    }

    /// Log root with `~` expanded.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        expand_path(&self.file.base_dir)
    }

    /// Remote collection path with `~` expanded.
    #[must_use]
    pub fn remote_path(&self) -> PathBuf {
        expand_path(&self.remote.path)
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
