//! Data models for the Ohio state parks dataset.
//!
//! This module contains the structures for park records as produced by the
//! crawler and enriched with Google search results.

pub mod park;

pub use park::{GoogleResult, Park, ParkRef};
