//! Shortest-travel-time ranking.

use crate::domain::{ActivityOption, StayOption, TransportOption};

use super::RankingStrategy;

/// Prefers the combination whose transport leg is shortest.
///
/// Only the transport duration matters; stay and activities are ignored.
pub struct Fastest;

impl RankingStrategy for Fastest {
    fn score(
        &self,
        transport: &TransportOption,
        _stay: &StayOption,
        _activities: &[ActivityOption],
    ) -> i64 {
        -i64::from(transport.duration_minutes)
    }

    fn name(&self) -> &str {
        "fastest"
    }
}
