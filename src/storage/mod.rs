use crate::{domain::Column, error::Result};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

/// Storage trait for persisting the board's column state
#[async_trait]
pub trait Storage: Send + Sync {
    /// Saves the full column collection, replacing any previous snapshot
    async fn save_columns(&self, columns: &[Column]) -> Result<()>;

    /// Loads the persisted column collection
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet, and also when
    /// the persisted snapshot cannot be deserialized; the parse failure is
    /// logged rather than propagated. I/O failures surface as errors.
    async fn load_columns(&self) -> Result<Option<Vec<Column>>>;
}
