//! Incremental itinerary assembly.

use crate::domain::{ActivityOption, Itinerary, LuggageOption, StayOption, TransportOption};

/// Accumulates selected options and produces immutable [`Itinerary`]
/// snapshots.
///
/// The builder is append-only: every `add_*` call pushes to the end of its
/// category's sequence, duplicates included. It performs no validation; the
/// category-specific methods are the only gate, so adding two transports is
/// legal and both are kept in insertion order.
///
/// [`ItineraryBuilder::result`] snapshots copies of the current state, so a
/// returned itinerary is never affected by later mutation. There is no
/// automatic reset between `result` calls; call [`ItineraryBuilder::reset`]
/// before reusing the builder for a new itinerary.
///
/// The builder is not meant to be shared between concurrent planning passes;
/// each pass owns it for its duration.
#[derive(Debug, Default)]
pub struct ItineraryBuilder {
    transports: Vec<TransportOption>,
    stays: Vec<StayOption>,
    activities: Vec<ActivityOption>,
    luggage: Vec<LuggageOption>,
}

impl ItineraryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all four accumulated sequences.
    pub fn reset(&mut self) {
        self.transports.clear();
        self.stays.clear();
        self.activities.clear();
        self.luggage.clear();
    }

    /// Appends a transport leg.
    pub fn add_transport(&mut self, option: TransportOption) {
        self.transports.push(option);
    }

    /// Appends a stay.
    pub fn add_stay(&mut self, option: StayOption) {
        self.stays.push(option);
    }

    /// Appends an activity.
    pub fn add_activity(&mut self, option: ActivityOption) {
        self.activities.push(option);
    }

    /// Appends a luggage service.
    pub fn add_luggage(&mut self, option: LuggageOption) {
        self.luggage.push(option);
    }

    /// Produces an immutable snapshot of the accumulated options.
    pub fn result(&self) -> Itinerary {
        Itinerary::new(
            self.transports.clone(),
            self.stays.clone(),
            self.activities.clone(),
            self.luggage.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActivityId, LuggageId, Price, StayId, TransportId, TransportMode};
    use chrono::NaiveTime;

    fn transport(id: u32) -> TransportOption {
        TransportOption {
            id: TransportId(id),
            mode: TransportMode::Bus,
            carrier: "FlixLine".to_string(),
            origin: "Lisbon".to_string(),
            destination: "Rome".to_string(),
            duration_minutes: 240,
            price: Price::new(4500),
        }
    }

    fn stay(id: u32) -> StayOption {
        StayOption {
            id: StayId(id),
            name: "Hotel Aurora".to_string(),
            location: "Rome".to_string(),
            price: Price::new(42_000),
        }
    }

    fn activity(id: u32) -> ActivityOption {
        ActivityOption {
            id: ActivityId(id),
            name: "Walking tour".to_string(),
            category: "tour".to_string(),
            location: "Rome".to_string(),
            open: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            typical_duration_minutes: 150,
            price: Price::new(2500),
        }
    }

    fn luggage(id: u32) -> LuggageOption {
        LuggageOption {
            id: LuggageId(id),
            provider: "BagPort".to_string(),
            weight_limit_kg: 23,
            price: Price::new(3000),
        }
    }

    #[test]
    fn empty_builder_produces_empty_itinerary() {
        let builder = ItineraryBuilder::new();
        let itinerary = builder.result();

        assert!(itinerary.is_empty());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut builder = ItineraryBuilder::new();
        builder.add_activity(activity(3));
        builder.add_activity(activity(1));
        builder.add_activity(activity(2));

        let itinerary = builder.result();
        let ids: Vec<u32> = itinerary.activities().iter().map(|a| a.id.0).collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn duplicates_are_retained() {
        let mut builder = ItineraryBuilder::new();
        builder.add_transport(transport(1));
        builder.add_transport(transport(1));

        let itinerary = builder.result();

        assert_eq!(itinerary.transports().len(), 2);
    }

    #[test]
    fn result_is_idempotent() {
        let mut builder = ItineraryBuilder::new();
        builder.add_transport(transport(1));
        builder.add_stay(stay(2));
        builder.add_luggage(luggage(4));

        let first = builder.result();
        let second = builder.result();

        assert_eq!(first, second);
    }

    #[test]
    fn later_mutation_does_not_alias_snapshot() {
        let mut builder = ItineraryBuilder::new();
        builder.add_transport(transport(1));

        let snapshot = builder.result();
        builder.add_transport(transport(2));
        builder.add_stay(stay(9));

        assert_eq!(snapshot.transports().len(), 1);
        assert!(snapshot.stays().is_empty());
    }

    #[test]
    fn reset_clears_all_categories() {
        let mut builder = ItineraryBuilder::new();
        builder.add_transport(transport(1));
        builder.add_stay(stay(2));
        builder.add_activity(activity(3));
        builder.add_luggage(luggage(4));

        builder.reset();
        let itinerary = builder.result();

        assert!(itinerary.transports().is_empty());
        assert!(itinerary.stays().is_empty());
        assert!(itinerary.activities().is_empty());
        assert!(itinerary.luggage().is_empty());
    }

    #[test]
    fn reset_then_reuse() {
        let mut builder = ItineraryBuilder::new();
        builder.add_transport(transport(1));
        let first = builder.result();

        builder.reset();
        builder.add_transport(transport(2));
        let second = builder.result();

        assert_eq!(first.transports()[0].id, TransportId(1));
        assert_eq!(second.transports()[0].id, TransportId(2));
        assert_eq!(second.transports().len(), 1);
    }
}
