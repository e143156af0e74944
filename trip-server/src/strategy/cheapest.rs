//! Lowest-total-cost ranking.

use crate::domain::{ActivityOption, StayOption, TransportOption};

use super::RankingStrategy;

/// Prefers the combination with the lowest total price.
///
/// The score is the negated sum of all prices: a trip costing 300 scores
/// -300, and -300 > -500, so the cheaper trip wins.
pub struct Cheapest;

impl RankingStrategy for Cheapest {
    fn score(
        &self,
        transport: &TransportOption,
        stay: &StayOption,
        activities: &[ActivityOption],
    ) -> i64 {
        let activities_price: i64 = activities
            .iter()
            .map(|a| i64::from(a.price.minor_units()))
            .sum();

        let total = i64::from(transport.price.minor_units())
            + i64::from(stay.price.minor_units())
            + activities_price;

        -total
    }

    fn name(&self) -> &str {
        "cheapest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_fixtures::{activity, stay, transport};

    #[test]
    fn score_is_negated_total() {
        let t = transport(100, 60);
        let s = stay(300);
        let acts = vec![activity(1, 40), activity(2, 50)];

        assert_eq!(Cheapest.score(&t, &s, &acts), -490);
    }

    #[test]
    fn no_activities() {
        let t = transport(100, 60);
        let s = stay(300);

        assert_eq!(Cheapest.score(&t, &s, &[]), -400);
    }

    #[test]
    fn cheaper_trip_scores_higher() {
        let s = stay(300);

        let cheap = Cheapest.score(&transport(100, 60), &s, &[]);
        let pricey = Cheapest.score(&transport(500, 60), &s, &[]);

        assert!(cheap > pricey);
    }

    #[test]
    fn free_trip_scores_zero() {
        assert_eq!(Cheapest.score(&transport(0, 60), &stay(0), &[]), 0);
    }

    #[test]
    fn large_prices_do_not_overflow() {
        let t = transport(u32::MAX, 60);
        let s = stay(u32::MAX);
        let acts = vec![activity(1, u32::MAX)];

        assert_eq!(Cheapest.score(&t, &s, &acts), -3 * i64::from(u32::MAX));
    }

    #[test]
    fn name() {
        assert_eq!(Cheapest.name(), "cheapest");
    }
}
