//! The itinerary product type.

use super::{ActivityOption, LuggageOption, StayOption, TransportOption};

/// A finalized trip: the selected options across all categories.
///
/// An `Itinerary` is immutable once returned. It owns copies of its options,
/// so mutating the builder that produced it never changes an itinerary already
/// handed out. Sequences preserve the order in which options were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    transports: Vec<TransportOption>,
    stays: Vec<StayOption>,
    activities: Vec<ActivityOption>,
    luggage: Vec<LuggageOption>,
}

impl Itinerary {
    /// Assembles an itinerary from owned option lists.
    ///
    /// Only the builder constructs these; callers receive them fully formed.
    pub(crate) fn new(
        transports: Vec<TransportOption>,
        stays: Vec<StayOption>,
        activities: Vec<ActivityOption>,
        luggage: Vec<LuggageOption>,
    ) -> Self {
        Itinerary {
            transports,
            stays,
            activities,
            luggage,
        }
    }

    /// Selected transport legs, in insertion order.
    pub fn transports(&self) -> &[TransportOption] {
        &self.transports
    }

    /// Selected stays, in insertion order.
    pub fn stays(&self) -> &[StayOption] {
        &self.stays
    }

    /// Selected activities, in insertion order.
    pub fn activities(&self) -> &[ActivityOption] {
        &self.activities
    }

    /// Selected luggage services, in insertion order.
    pub fn luggage(&self) -> &[LuggageOption] {
        &self.luggage
    }

    /// Total number of options across all categories.
    pub fn option_count(&self) -> usize {
        self.transports.len() + self.stays.len() + self.activities.len() + self.luggage.len()
    }

    /// Returns true if no options were selected at all.
    pub fn is_empty(&self) -> bool {
        self.option_count() == 0
    }

    /// Sum of all option prices, in minor units.
    ///
    /// Widened to `u64` so the sum cannot overflow.
    pub fn total_price(&self) -> u64 {
        let transports: u64 = self
            .transports
            .iter()
            .map(|t| u64::from(t.price.minor_units()))
            .sum();
        let stays: u64 = self
            .stays
            .iter()
            .map(|s| u64::from(s.price.minor_units()))
            .sum();
        let activities: u64 = self
            .activities
            .iter()
            .map(|a| u64::from(a.price.minor_units()))
            .sum();
        let luggage: u64 = self
            .luggage
            .iter()
            .map(|l| u64::from(l.price.minor_units()))
            .sum();

        transports + stays + activities + luggage
    }
}
