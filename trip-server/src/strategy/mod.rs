//! Ranking strategies for trip combinations.
//!
//! A strategy assigns a score to a selected (transport, stay, activities)
//! combination; higher scores are preferred. Strategies are pure functions of
//! their inputs and carry a stable name used as their registry key.

mod cheapest;
mod fastest;
mod registry;

use std::sync::Arc;

pub use cheapest::Cheapest;
pub use fastest::Fastest;
pub use registry::{StrategyError, StrategyRegistry};

use crate::domain::{ActivityOption, StayOption, TransportOption};

/// A named scoring policy over a selected combination of options.
///
/// Implementations must be pure: no side effects, no internal state, and
/// identical inputs always produce identical scores. Ties are broken by the
/// caller, not the strategy.
pub trait RankingStrategy: Send + Sync {
    /// Scores a combination; higher is more preferred. The range is
    /// unbounded in both directions.
    fn score(
        &self,
        transport: &TransportOption,
        stay: &StayOption,
        activities: &[ActivityOption],
    ) -> i64;

    /// Stable name identifying this strategy, unique across the registry.
    fn name(&self) -> &str;
}

/// The full set of built-in strategies.
///
/// Handed to the planner at startup; replaces runtime discovery with an
/// explicit list.
pub fn default_strategies() -> Vec<Arc<dyn RankingStrategy>> {
    vec![Arc::new(Cheapest), Arc::new(Fastest)]
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    //! Shared option fixtures for strategy tests.

    use chrono::NaiveTime;

    use crate::domain::{
        ActivityId, ActivityOption, Price, StayId, StayOption, TransportId, TransportMode,
        TransportOption,
    };

    pub fn transport(price: u32, duration_minutes: u32) -> TransportOption {
        TransportOption {
            id: TransportId(1),
            mode: TransportMode::Flight,
            carrier: "Aria Air".to_string(),
            origin: "Lisbon".to_string(),
            destination: "Rome".to_string(),
            duration_minutes,
            price: Price::new(price),
        }
    }

    pub fn stay(price: u32) -> StayOption {
        StayOption {
            id: StayId(1),
            name: "Hotel Aurora".to_string(),
            location: "Rome".to_string(),
            price: Price::new(price),
        }
    }

    pub fn activity(id: u32, price: u32) -> ActivityOption {
        ActivityOption {
            id: ActivityId(id),
            name: "Galleria Borghese".to_string(),
            category: "museum".to_string(),
            location: "Rome".to_string(),
            open: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            typical_duration_minutes: 120,
            price: Price::new(price),
        }
    }
}
