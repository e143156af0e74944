//! Travel itinerary planning server.
//!
//! A web service that assembles a trip itinerary from independently
//! searchable option sets (transport, lodging, activities, luggage) and
//! scores the selected combination with a swappable ranking strategy.

pub mod builder;
pub mod cache;
pub mod catalog;
pub mod domain;
pub mod planner;
pub mod strategy;
pub mod web;
