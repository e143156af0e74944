//! Web layer for the travel planner.
//!
//! Provides the JSON API that marshals HTTP calls onto the planner
//! operations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, CatalogSearchProvider};
