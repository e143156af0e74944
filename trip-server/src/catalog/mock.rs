//! Mock catalog for testing without API access.
//!
//! Loads option fixtures from JSON files and answers queries by filtering
//! them in memory, so the planner can run end to end with no credentials.

use std::path::Path;

use crate::domain::{
    ActivityOption, ActivityQuery, StayOption, StayQuery, TransportOption, TransportQuery,
};
use crate::planner::{SearchError, SearchProvider};

use super::error::CatalogError;
use super::types::{ActivityRecord, StayRecord, TransportRecord};

/// In-memory catalog backed by fixture data.
///
/// Expects a directory containing `transports.json`, `stays.json`, and
/// `activities.json`, each holding an array of wire records. Queries are
/// answered by case-insensitive place matching, price-range filtering, and
/// (for transports) the query's result cap, preserving fixture order.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    transports: Vec<TransportOption>,
    stays: Vec<StayOption>,
    activities: Vec<ActivityOption>,
}

impl MockCatalog {
    /// Create a mock catalog from fixture files in `data_dir`.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let data_dir = data_dir.as_ref();

        let transports: Vec<TransportRecord> = load_fixture(&data_dir.join("transports.json"))?;
        let stays: Vec<StayRecord> = load_fixture(&data_dir.join("stays.json"))?;
        let activities: Vec<ActivityRecord> = load_fixture(&data_dir.join("activities.json"))?;

        let transports = transports
            .into_iter()
            .map(TransportOption::try_from)
            .collect::<Result<_, _>>()?;
        let stays = stays.into_iter().map(StayOption::from).collect();
        let activities = activities
            .into_iter()
            .map(ActivityOption::try_from)
            .collect::<Result<_, _>>()?;

        Ok(Self {
            transports,
            stays,
            activities,
        })
    }

    /// Create a mock catalog directly from domain options.
    pub fn with_options(
        transports: Vec<TransportOption>,
        stays: Vec<StayOption>,
        activities: Vec<ActivityOption>,
    ) -> Self {
        Self {
            transports,
            stays,
            activities,
        }
    }
}

fn load_fixture<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| CatalogError::Fixture(format!("failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&json)
        .map_err(|e| CatalogError::Fixture(format!("failed to parse {}: {}", path.display(), e)))
}

impl SearchProvider for MockCatalog {
    fn search_transports(
        &self,
        query: &TransportQuery,
    ) -> Result<Vec<TransportOption>, SearchError> {
        let mut matches: Vec<TransportOption> = self
            .transports
            .iter()
            .filter(|t| {
                t.origin.eq_ignore_ascii_case(query.origin())
                    && t.destination.eq_ignore_ascii_case(query.destination())
                    && query.price().contains(t.price)
            })
            .cloned()
            .collect();
        matches.truncate(query.max_results());

        Ok(matches)
    }

    fn search_stays(&self, query: &StayQuery) -> Result<Vec<StayOption>, SearchError> {
        Ok(self
            .stays
            .iter()
            .filter(|s| {
                s.location.eq_ignore_ascii_case(query.location())
                    && query.price().contains(s.price)
            })
            .cloned()
            .collect())
    }

    fn search_activities(
        &self,
        query: &ActivityQuery,
    ) -> Result<Vec<ActivityOption>, SearchError> {
        Ok(self
            .activities
            .iter()
            .filter(|a| {
                a.location.eq_ignore_ascii_case(query.location())
                    && query.price().contains(a.price)
                    && query
                        .category()
                        .is_none_or(|c| a.category.eq_ignore_ascii_case(c))
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Price, PriceRange, TransportId};
    use chrono::NaiveDate;

    const TRANSPORTS: &str = r#"[
        {"id": 1, "mode": "flight", "carrier": "Aria Air", "origin": "Lisbon",
         "destination": "Rome", "durationMinutes": 170, "priceAmount": 12000},
        {"id": 2, "mode": "bus", "carrier": "FlixLine", "origin": "Lisbon",
         "destination": "Rome", "durationMinutes": 2100, "priceAmount": 6500},
        {"id": 3, "mode": "train", "carrier": "Renfe", "origin": "Lisbon",
         "destination": "Madrid", "durationMinutes": 600, "priceAmount": 4000}
    ]"#;

    const STAYS: &str = r#"[
        {"id": 1, "name": "Hotel Aurora", "location": "Rome", "priceAmount": 42000},
        {"id": 2, "name": "Hostel Sole", "location": "Rome", "priceAmount": 9000},
        {"id": 3, "name": "Casa Azul", "location": "Madrid", "priceAmount": 15000}
    ]"#;

    const ACTIVITIES: &str = r#"[
        {"id": 1, "name": "Galleria Borghese", "category": "museum", "location": "Rome",
         "openTime": "09:00", "closeTime": "19:00", "typicalDurationMinutes": 120,
         "priceAmount": 1500},
        {"id": 2, "name": "Food tour", "category": "tour", "location": "Rome",
         "openTime": "17:00", "closeTime": "22:00", "typicalDurationMinutes": 180,
         "priceAmount": 7500}
    ]"#;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn fixture_catalog() -> MockCatalog {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("transports.json"), TRANSPORTS).unwrap();
        std::fs::write(dir.path().join("stays.json"), STAYS).unwrap();
        std::fs::write(dir.path().join("activities.json"), ACTIVITIES).unwrap();

        MockCatalog::from_dir(dir.path()).unwrap()
    }

    fn transport_query(origin: &str, destination: &str, max_results: usize) -> TransportQuery {
        TransportQuery::new(
            origin,
            destination,
            date("2025-06-01"),
            2,
            PriceRange::unbounded(),
            max_results,
        )
        .unwrap()
    }

    #[test]
    fn loads_fixtures() {
        let catalog = fixture_catalog();

        let results = catalog
            .search_transports(&transport_query("Lisbon", "Rome", 10))
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, TransportId(1));
        assert_eq!(results[1].id, TransportId(2));
    }

    #[test]
    fn missing_fixture_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("transports.json"), TRANSPORTS).unwrap();

        let result = MockCatalog::from_dir(dir.path());

        assert!(matches!(result, Err(CatalogError::Fixture(_))));
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("transports.json"), "not json").unwrap();
        std::fs::write(dir.path().join("stays.json"), STAYS).unwrap();
        std::fs::write(dir.path().join("activities.json"), ACTIVITIES).unwrap();

        let result = MockCatalog::from_dir(dir.path());

        assert!(matches!(result, Err(CatalogError::Fixture(_))));
    }

    #[test]
    fn transport_search_respects_cap() {
        let catalog = fixture_catalog();

        let results = catalog
            .search_transports(&transport_query("Lisbon", "Rome", 1))
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, TransportId(1));
    }

    #[test]
    fn transport_search_matches_case_insensitively() {
        let catalog = fixture_catalog();

        let results = catalog
            .search_transports(&transport_query("LISBON", "rome", 10))
            .unwrap();

        assert_eq!(results.len(), 2);
    }

    #[test]
    fn unknown_route_returns_empty() {
        let catalog = fixture_catalog();

        let results = catalog
            .search_transports(&transport_query("Lisbon", "Tokyo", 10))
            .unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn transport_search_filters_by_price() {
        let catalog = fixture_catalog();

        let query = TransportQuery::new(
            "Lisbon",
            "Rome",
            date("2025-06-01"),
            2,
            PriceRange::new(Price::ZERO, Price::new(10_000)).unwrap(),
            10,
        )
        .unwrap();

        let results = catalog.search_transports(&query).unwrap();

        // Only the 6500 bus fits under the 10000 cap
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, TransportId(2));
    }

    #[test]
    fn stay_search_filters_by_location() {
        let catalog = fixture_catalog();

        let query = StayQuery::new(
            "Rome",
            date("2025-06-01"),
            date("2025-06-08"),
            2,
            PriceRange::unbounded(),
        )
        .unwrap();

        let results = catalog.search_stays(&query).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Hotel Aurora");
    }

    #[test]
    fn activity_search_honours_category_filter() {
        let catalog = fixture_catalog();

        let all = ActivityQuery::new(
            "Rome",
            date("2025-06-01"),
            date("2025-06-08"),
            None,
            PriceRange::unbounded(),
        )
        .unwrap();
        assert_eq!(catalog.search_activities(&all).unwrap().len(), 2);

        let museums = ActivityQuery::new(
            "Rome",
            date("2025-06-01"),
            date("2025-06-08"),
            Some("museum".to_string()),
            PriceRange::unbounded(),
        )
        .unwrap();
        let results = catalog.search_activities(&museums).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Galleria Borghese");
    }
}
