use crate::{domain::Column, error::Result, storage::Storage};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory string-keyed storage
///
/// The board snapshot lives as serialized JSON under a fixed key, the shape
/// of a browser-style key-value store. Useful for tests and for embedding
/// the store without touching disk.
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    const BOARD_KEY: &'static str = "driftboard.board";

    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Seeds the raw value stored under the board key, bypassing
    /// serialization; lets tests exercise malformed-state handling
    pub async fn set_raw(&self, value: impl Into<String>) {
        self.entries
            .lock()
            .await
            .insert(Self::BOARD_KEY.to_string(), value.into());
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn save_columns(&self, columns: &[Column]) -> Result<()> {
        let json = serde_json::to_string(columns)?;
        self.entries
            .lock()
            .await
            .insert(Self::BOARD_KEY.to_string(), json);
        Ok(())
    }

    async fn load_columns(&self) -> Result<Option<Vec<Column>>> {
        let entries = self.entries.lock().await;
        let Some(raw) = entries.get(Self::BOARD_KEY) else {
            return Ok(None);
        };

        match serde_json::from_str(raw) {
            Ok(columns) => Ok(Some(columns)),
            Err(err) => {
                tracing::warn!(
                    "failed to parse board state under key {}: {err}",
                    Self::BOARD_KEY
                );
                Ok(None)
            }
        }
    }
}
