//! Catalog API wire types.
//!
//! These mirror the JSON the catalog service returns. They are converted to
//! domain types at the boundary, so the rest of the crate never sees raw wire
//! data.

use chrono::NaiveTime;
use serde::Deserialize;

use crate::domain::{
    ActivityId, ActivityOption, LuggageId, LuggageOption, Price, StayId, StayOption, TransportId,
    TransportMode, TransportOption,
};

/// Error converting a wire record to a domain option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Transport mode string not recognised
    #[error("unknown transport mode: {0}")]
    UnknownMode(String),

    /// A time field that does not parse as HH:MM
    #[error("invalid time '{value}' in field {field}")]
    BadTime { field: &'static str, value: String },
}

/// Wire representation of a transport option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRecord {
    pub id: u32,
    pub mode: String,
    pub carrier: String,
    pub origin: String,
    pub destination: String,
    pub duration_minutes: u32,
    pub price_amount: u32,
}

impl TryFrom<TransportRecord> for TransportOption {
    type Error = ConvertError;

    fn try_from(record: TransportRecord) -> Result<Self, ConvertError> {
        let mode = match record.mode.as_str() {
            "flight" => TransportMode::Flight,
            "train" => TransportMode::Train,
            "bus" => TransportMode::Bus,
            other => return Err(ConvertError::UnknownMode(other.to_string())),
        };

        Ok(TransportOption {
            id: TransportId(record.id),
            mode,
            carrier: record.carrier,
            origin: record.origin,
            destination: record.destination,
            duration_minutes: record.duration_minutes,
            price: Price::new(record.price_amount),
        })
    }
}

/// Wire representation of a stay option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayRecord {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub price_amount: u32,
}

impl From<StayRecord> for StayOption {
    fn from(record: StayRecord) -> Self {
        StayOption {
            id: StayId(record.id),
            name: record.name,
            location: record.location,
            price: Price::new(record.price_amount),
        }
    }
}

/// Wire representation of an activity option.
///
/// Opening hours arrive as "HH:MM" strings and are parsed during conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub location: String,
    pub open_time: String,
    pub close_time: String,
    pub typical_duration_minutes: u32,
    pub price_amount: u32,
}

fn parse_hhmm(field: &'static str, value: &str) -> Result<NaiveTime, ConvertError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ConvertError::BadTime {
        field,
        value: value.to_string(),
    })
}

impl TryFrom<ActivityRecord> for ActivityOption {
    type Error = ConvertError;

    fn try_from(record: ActivityRecord) -> Result<Self, ConvertError> {
        let open = parse_hhmm("openTime", &record.open_time)?;
        let close = parse_hhmm("closeTime", &record.close_time)?;

        Ok(ActivityOption {
            id: ActivityId(record.id),
            name: record.name,
            category: record.category,
            location: record.location,
            open,
            close,
            typical_duration_minutes: record.typical_duration_minutes,
            price: Price::new(record.price_amount),
        })
    }
}

/// Wire representation of a luggage option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuggageRecord {
    pub id: u32,
    pub provider: String,
    pub weight_limit_kg: u32,
    pub price_amount: u32,
}

impl From<LuggageRecord> for LuggageOption {
    fn from(record: LuggageRecord) -> Self {
        LuggageOption {
            id: LuggageId(record.id),
            provider: record.provider,
            weight_limit_kg: record.weight_limit_kg,
            price: Price::new(record.price_amount),
        }
    }
}

/// Response wrapper for transport searches.
#[derive(Debug, Deserialize)]
pub struct TransportSearchResponse {
    pub transports: Vec<TransportRecord>,
}

/// Response wrapper for stay searches.
#[derive(Debug, Deserialize)]
pub struct StaySearchResponse {
    pub stays: Vec<StayRecord>,
}

/// Response wrapper for activity searches.
#[derive(Debug, Deserialize)]
pub struct ActivitySearchResponse {
    pub activities: Vec<ActivityRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_record_roundtrip() {
        let json = r#"{
            "id": 5,
            "mode": "train",
            "carrier": "Trenitalia",
            "origin": "Lisbon",
            "destination": "Rome",
            "durationMinutes": 480,
            "priceAmount": 8900
        }"#;

        let record: TransportRecord = serde_json::from_str(json).unwrap();
        let option = TransportOption::try_from(record).unwrap();

        assert_eq!(option.id, TransportId(5));
        assert_eq!(option.mode, TransportMode::Train);
        assert_eq!(option.carrier, "Trenitalia");
        assert_eq!(option.duration_minutes, 480);
        assert_eq!(option.price, Price::new(8900));
    }

    #[test]
    fn unknown_mode_rejected() {
        let record = TransportRecord {
            id: 1,
            mode: "zeppelin".to_string(),
            carrier: "x".to_string(),
            origin: "a".to_string(),
            destination: "b".to_string(),
            duration_minutes: 10,
            price_amount: 10,
        };

        let result = TransportOption::try_from(record);

        assert_eq!(
            result,
            Err(ConvertError::UnknownMode("zeppelin".to_string()))
        );
    }

    #[test]
    fn activity_record_parses_opening_hours() {
        let json = r#"{
            "id": 11,
            "name": "Galleria Borghese",
            "category": "museum",
            "location": "Rome",
            "openTime": "09:00",
            "closeTime": "19:00",
            "typicalDurationMinutes": 120,
            "priceAmount": 1500
        }"#;

        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        let option = ActivityOption::try_from(record).unwrap();

        assert_eq!(option.open, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(option.close, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
    }

    #[test]
    fn activity_bad_time_rejected() {
        let record = ActivityRecord {
            id: 1,
            name: "x".to_string(),
            category: "y".to_string(),
            location: "z".to_string(),
            open_time: "quarter past nine".to_string(),
            close_time: "19:00".to_string(),
            typical_duration_minutes: 60,
            price_amount: 100,
        };

        let result = ActivityOption::try_from(record);

        assert!(matches!(
            result,
            Err(ConvertError::BadTime { field: "openTime", .. })
        ));
    }

    #[test]
    fn stay_and_luggage_records_convert() {
        let stay: StayRecord = serde_json::from_str(
            r#"{"id": 3, "name": "Hotel Aurora", "location": "Rome", "priceAmount": 42000}"#,
        )
        .unwrap();
        let stay = StayOption::from(stay);
        assert_eq!(stay.id, StayId(3));
        assert_eq!(stay.price, Price::new(42_000));

        let luggage: LuggageRecord = serde_json::from_str(
            r#"{"id": 7, "provider": "BagPort", "weightLimitKg": 23, "priceAmount": 3000}"#,
        )
        .unwrap();
        let luggage = LuggageOption::from(luggage);
        assert_eq!(luggage.id, LuggageId(7));
        assert_eq!(luggage.weight_limit_kg, 23);
    }

    #[test]
    fn search_response_wrappers() {
        let response: TransportSearchResponse =
            serde_json::from_str(r#"{"transports": []}"#).unwrap();
        assert!(response.transports.is_empty());

        let response: StaySearchResponse = serde_json::from_str(r#"{"stays": []}"#).unwrap();
        assert!(response.stays.is_empty());

        let response: ActivitySearchResponse =
            serde_json::from_str(r#"{"activities": []}"#).unwrap();
        assert!(response.activities.is_empty());
    }
}
