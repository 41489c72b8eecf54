use crate::error::{ParkDataError, ParkDataResult};
use crate::models::Park;
use crate::repositories::traits::ParkRepository;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Park repository backed by the enriched dataset JSON file.
///
/// Reads and parses the whole file on every call; the tools layer keeps
/// the built index in a TTL cache, so loads only happen on cache misses.
pub struct JsonParkRepository {
    path: PathBuf,
}

impl JsonParkRepository {
    /// Create a repository for the dataset at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dataset file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ParkRepository for JsonParkRepository {
    async fn load_all(&self) -> ParkDataResult<Vec<Park>> {
        let path = self.path.clone();

        // File I/O and parsing happen off the async runtime.
        let parks = tokio::task::spawn_blocking(move || -> ParkDataResult<Vec<Park>> {
            let raw = std::fs::read_to_string(&path).map_err(|source| ParkDataError::Io {
                path: path.display().to_string(),
                source,
            })?;

            serde_json::from_str(&raw).map_err(|source| ParkDataError::Parse {
                path: path.display().to_string(),
                source,
            })
        })
        .await
        .map_err(|e| ParkDataError::Other(format!("Dataset load task failed: {}", e)))??;

        tracing::debug!("Loaded {} parks from {}", parks.len(), self.path.display());
        Ok(parks)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}
