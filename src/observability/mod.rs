//! Observability for the parks MCP server.
//!
//! Counter-based metrics and operation timers; log output itself is
//! configured at startup in `main`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
