use super::{LogDocument, RemoteStore};
use crate::Error;
use std::sync::Mutex;

/// In-process collection. Useful when the documents are consumed by the
/// same process, and for asserting on what would have been persisted.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    docs: Mutex<Vec<LogDocument>>,
}

impl MemoryCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot in insertion order.
    #[must_use]
    pub fn documents(&self) -> Vec<LogDocument> {
        self.docs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RemoteStore for MemoryCollection {
    fn insert_one(&self, doc: &LogDocument) -> Result<(), Error> {
        self.docs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(doc.clone());
        Ok(())
    }
}
