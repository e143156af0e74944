//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ActivityOption, Itinerary, LuggageOption, StayOption, TransportOption};

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    /// Where the trip starts
    pub origin: String,

    /// Where the trip goes
    pub destination: String,

    /// Outbound date (ISO 8601)
    pub depart_date: NaiveDate,

    /// Return date (ISO 8601)
    pub return_date: NaiveDate,

    /// Number of travellers
    pub passengers: u32,
}

/// Request to change the active ranking strategy.
#[derive(Debug, Deserialize)]
pub struct SetStrategyRequest {
    /// Name of a registered strategy, e.g. "cheapest"
    pub strategy: String,
}

/// The active strategy and everything else on offer.
#[derive(Debug, Serialize)]
pub struct StrategyResponse {
    /// Currently active strategy name
    pub active: String,

    /// All registered strategy names
    pub available: Vec<String>,
}

/// A transport leg in an itinerary response.
#[derive(Debug, Serialize)]
pub struct TransportView {
    pub id: u32,
    pub mode: String,
    pub carrier: String,
    pub origin: String,
    pub destination: String,
    pub duration_minutes: u32,
    pub price_amount: u32,
}

impl TransportView {
    fn from_option(option: &TransportOption) -> Self {
        Self {
            id: option.id.0,
            mode: option.mode.to_string(),
            carrier: option.carrier.clone(),
            origin: option.origin.clone(),
            destination: option.destination.clone(),
            duration_minutes: option.duration_minutes,
            price_amount: option.price.minor_units(),
        }
    }
}

/// A stay in an itinerary response.
#[derive(Debug, Serialize)]
pub struct StayView {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub price_amount: u32,
}

impl StayView {
    fn from_option(option: &StayOption) -> Self {
        Self {
            id: option.id.0,
            name: option.name.clone(),
            location: option.location.clone(),
            price_amount: option.price.minor_units(),
        }
    }
}

/// An activity in an itinerary response.
#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub location: String,
    /// Opening time, "HH:MM"
    pub open_time: String,
    /// Closing time, "HH:MM"
    pub close_time: String,
    pub typical_duration_minutes: u32,
    pub price_amount: u32,
}

impl ActivityView {
    fn from_option(option: &ActivityOption) -> Self {
        Self {
            id: option.id.0,
            name: option.name.clone(),
            category: option.category.clone(),
            location: option.location.clone(),
            open_time: option.open.format("%H:%M").to_string(),
            close_time: option.close.format("%H:%M").to_string(),
            typical_duration_minutes: option.typical_duration_minutes,
            price_amount: option.price.minor_units(),
        }
    }
}

/// A luggage service in an itinerary response.
#[derive(Debug, Serialize)]
pub struct LuggageView {
    pub id: u32,
    pub provider: String,
    pub weight_limit_kg: u32,
    pub price_amount: u32,
}

impl LuggageView {
    fn from_option(option: &LuggageOption) -> Self {
        Self {
            id: option.id.0,
            provider: option.provider.clone(),
            weight_limit_kg: option.weight_limit_kg,
            price_amount: option.price.minor_units(),
        }
    }
}

/// A planned itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub transports: Vec<TransportView>,
    pub stays: Vec<StayView>,
    pub activities: Vec<ActivityView>,
    pub luggage: Vec<LuggageView>,

    /// Sum of all option prices, minor units
    pub total_price: u64,

    /// Score of the selected combination under `strategy`
    pub score: Option<i64>,

    /// Strategy that produced `score`
    pub strategy: String,
}

impl ItineraryResponse {
    /// Builds the response from a planned itinerary and the scoring context.
    pub fn from_itinerary(itinerary: &Itinerary, score: Option<i64>, strategy: &str) -> Self {
        Self {
            transports: itinerary
                .transports()
                .iter()
                .map(TransportView::from_option)
                .collect(),
            stays: itinerary.stays().iter().map(StayView::from_option).collect(),
            activities: itinerary
                .activities()
                .iter()
                .map(ActivityView::from_option)
                .collect(),
            luggage: itinerary
                .luggage()
                .iter()
                .map(LuggageView::from_option)
                .collect(),
            total_price: itinerary.total_price(),
            score,
            strategy: strategy.to_string(),
        }
    }
}

/// Error payload for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
