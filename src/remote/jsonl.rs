//! Append-only JSONL collection: one document per line in a single file.
//! Stands in for a networked store where none is available and keeps
//! documents greppable with standard tools.

use super::{LogDocument, RemoteStore};
use crate::internal;
use crate::Error;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug)]
pub struct JsonlCollection {
    file_path: PathBuf,
    /// Serializes appends from concurrent callers so lines never interleave.
    append: Mutex<()>,
}

impl JsonlCollection {
    /// `~` in the path is expanded to the home directory.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        Self {
            file_path: PathBuf::from(expanded.as_ref()),
            append: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads every stored document back. Lines that fail to parse are skipped.
    ///
    /// # Errors
    /// I/O errors other than the file not existing yet.
    pub fn documents(&self) -> Result<Vec<LogDocument>, Error> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(content
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect())
    }
}

impl RemoteStore for JsonlCollection {
    fn insert_one(&self, doc: &LogDocument) -> Result<(), Error> {
        let json = serde_json::to_string(doc)
            .map_err(|e| Error::Remote(format!("serialization failed: {e}")))?;

        let _guard = self
            .append
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Remote(format!("could not create {}: {e}", parent.display()))
            })?;
            internal::debug("REMOTE", &format!("Created directory: {}", parent.display()));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .map_err(|e| Error::Remote(format!("{}: {e}", self.file_path.display())))?;

        writeln!(file, "{json}").map_err(|e| Error::Remote(e.to_string()))
    }
}
