use crate::{domain::Column, error::Result, storage::Storage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation
///
/// The board snapshot lives as pretty-printed JSON at
/// `<root>/.driftboard/board.json`.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const DRIFTBOARD_DIR: &'static str = ".driftboard";
    const BOARD_FILE: &'static str = "board.json";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::DRIFTBOARD_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn save_columns(&self, columns: &[Column]) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(columns)?;
        fs::write(self.board_file(), json).await?;

        Ok(())
    }

    async fn load_columns(&self) -> Result<Option<Vec<Column>>> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&board_file).await?;
        match serde_json::from_str(&contents) {
            Ok(columns) => Ok(Some(columns)),
            Err(err) => {
                tracing::warn!(
                    "failed to parse board state at {}: {err}",
                    board_file.display()
                );
                Ok(None)
            }
        }
    }
}
