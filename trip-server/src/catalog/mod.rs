//! Catalog service integration.
//!
//! The catalog is the external search source for travel options. This module
//! holds the HTTP client for the real service, the wire types it speaks, and
//! a file-backed mock for development and tests.

mod client;
mod error;
mod mock;
mod types;

pub use client::{CatalogClient, CatalogConfig};
pub use error::CatalogError;
pub use mock::MockCatalog;
pub use types::{
    ActivityRecord, ActivitySearchResponse, ConvertError, LuggageRecord, StayRecord,
    StaySearchResponse, TransportRecord, TransportSearchResponse,
};
