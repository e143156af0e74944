//! Domain types for the travel planner.
//!
//! This module contains the core domain model: searchable options, the
//! queries that find them, and the itinerary assembled from them. All types
//! enforce their invariants at construction time, so code that receives these
//! types can trust their validity.

mod activity;
mod error;
mod itinerary;
mod luggage;
mod price;
mod query;
mod stay;
mod transport;

pub use activity::{ActivityId, ActivityOption};
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use luggage::{LuggageId, LuggageOption};
pub use price::{Price, PriceRange};
pub use query::{ActivityQuery, StayQuery, TransportQuery, TripQuery};
pub use stay::{StayId, StayOption};
pub use transport::{TransportId, TransportMode, TransportOption};
