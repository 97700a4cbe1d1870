//! Configuration struct definitions.

use crate::output::Layout;
use serde::Deserialize;

fn project_state_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "daqlog")
        .map(|dirs| dirs.state_dir().unwrap_or_else(|| dirs.data_dir()).to_path_buf())
}

/// Identity and diagnostics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Host identifier written into file names and documents.
    pub host: String,
    /// Overrides the build identifier compiled into the INIT banner.
    pub build_id: Option<String>,
    /// Lowest level of daqlog's own console diagnostics.
    pub verbosity: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("HOSTNAME")
                .ok()
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| "localhost".to_string()),
            build_id: None,
            verbosity: "message".to_string(),
        }
    }
}

/// Local file output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Root of the log tree. `~` is expanded.
    pub base_dir: String,
    /// `flat` or `hierarchical`.
    pub layout: Layout,
    /// Days a file is kept before the rotation deletes it. 0 keeps forever.
    pub retention_days: u32,
    /// Seconds between background flushes. 0 flushes after every entry.
    pub flush_period_secs: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        let base_dir = project_state_dir().map_or_else(
            || "logs".to_string(),
            |dir| dir.join("logs").to_string_lossy().into_owned(),
        );

        Self {
            base_dir,
            layout: Layout::Flat,
            retention_days: 0,
            flush_period_secs: 5,
        }
    }
}

/// Document store output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    /// Entries with `priority >= threshold` are persisted.
    pub threshold: i32,
    /// JSONL collection file. `~` is expanded.
    pub path: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        let path = project_state_dir().map_or_else(
            || "log.jsonl".to_string(),
            |dir| dir.join("db").join("log.jsonl").to_string_lossy().into_owned(),
        );

        Self {
            enabled: true,
            threshold: 1,
            path,
        }
    }
}
