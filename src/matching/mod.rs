//! Park matching pipeline.
//!
//! Builds a precomputed index over the dataset, scores every park with
//! four independent strategies, and ranks the resulting records.

pub mod park_index;
pub mod park_matcher;
pub mod partial_ratio;
pub mod ranking;

pub use park_index::{IndexedPark, ParkIndex};
pub use park_matcher::{MatchMethod, ParkMatch, ParkMatcher};
pub use partial_ratio::partial_ratio;
pub use ranking::{rank_matches, SearchOutcome};
