//! Trip planning orchestration.
//!
//! This module contains the planner facade that front-ends talk to: it runs
//! one search per option category, picks a candidate combination, scores it
//! with the active ranking strategy, and assembles the resulting itinerary.

mod config;
mod plan;

pub use config::PlanConfig;
pub use plan::{PlanError, SearchCategory, SearchError, SearchProvider, TravelPlanner};
