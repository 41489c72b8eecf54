//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the domain types and the tools. They provide a clean boundary between
//! the MCP handlers and the matching pipeline.

mod park_search_service;

pub use park_search_service::{ParkSearchService, ParkSearchServiceImpl};

// Re-export common types used by services
pub use crate::tools::{AskResponse, AskTools, ListParksResponse, ParkSummary};
