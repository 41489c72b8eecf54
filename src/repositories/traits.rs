use crate::error::ParkDataResult;
use crate::models::Park;
use async_trait::async_trait;

/// Repository for the parks dataset.
///
/// Abstracts over where the dataset lives (local JSON file, mock),
/// so the tools layer and tests can swap implementations.
#[async_trait]
pub trait ParkRepository: Send + Sync {
    /// Load the full dataset in its stored order.
    async fn load_all(&self) -> ParkDataResult<Vec<Park>>;

    /// Human-readable description of the data source, for logs and
    /// response metadata.
    fn source(&self) -> String;
}
