//! Tools backing the MCP surface.
//!
//! One category for now:
//! - **Ask**: multi-strategy park matching over a cached index

pub mod ask;

pub use ask::{AskResponse, AskTools, ListParksResponse, ParkSummary};
