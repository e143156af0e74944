//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! raised at construction time, so code that receives a domain value can
//! trust its invariants.

use chrono::NaiveDate;

use super::Price;

/// Domain-level errors for value-object validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Price range with min above max
    #[error("invalid price range: min {min} exceeds max {max}")]
    InvalidPriceRange { min: Price, max: Price },

    /// Date range that ends before it starts
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Queries must cover at least one traveller
    #[error("at least one passenger is required")]
    NoPassengers,

    /// Origin, destination, or location left blank
    #[error("place name must not be empty")]
    EmptyPlace,
}
