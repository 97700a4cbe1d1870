//! The shared document store operators query across the fleet.
//!
//! The store itself is out of scope; daqlog only needs to insert one document
//! per entry, so the seam is a single-method trait. Failures are contained
//! here and never reach the local write path.

mod jsonl;
mod memory;

pub use jsonl::JsonlCollection;
pub use memory::MemoryCollection;

use crate::internal;
use crate::Error;
use serde::{Deserialize, Serialize};

/// One persisted entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDocument {
    pub host: String,
    pub message: String,
    pub priority: i32,
    /// -1 when no run is active.
    pub runid: i64,
}

/// Insert-only access to a document collection.
pub trait RemoteStore: Send + Sync {
    /// # Errors
    /// [`Error::Remote`] (or any other variant) when the document was not stored.
    fn insert_one(&self, doc: &LogDocument) -> Result<(), Error>;
}

/// Builds documents and contains store failures.
pub struct RemoteSink {
    store: Box<dyn RemoteStore>,
}

impl std::fmt::Debug for RemoteSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSink").finish_non_exhaustive()
    }
}

impl RemoteSink {
    #[must_use]
    pub fn new(store: impl RemoteStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Inserts one document. A failure is reported on the console with the
    /// message and priority, then handed back for the caller to count.
    ///
    /// # Errors
    /// [`Error::Remote`] describing the failed insert.
    pub fn persist(
        &self,
        host: &str,
        message: &str,
        priority: i32,
        run_id: i64,
    ) -> Result<(), Error> {
        let doc = LogDocument {
            host: host.to_string(),
            message: message.to_string(),
            priority,
            runid: run_id,
        };
        self.store.insert_one(&doc).map_err(|e| {
            internal::warn(
                "REMOTE",
                &format!("Failed to insert log message {message} ({priority}): {e}"),
            );
            match e {
                Error::Remote(reason) => Error::Remote(reason),
                other => Error::Remote(other.to_string()),
            }
        })
    }
}

impl<T: RemoteStore + ?Sized> RemoteStore for std::sync::Arc<T> {
    fn insert_one(&self, doc: &LogDocument) -> Result<(), Error> {
        (**self).insert_one(doc)
    }
}
