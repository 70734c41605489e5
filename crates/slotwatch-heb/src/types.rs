//! HEB commerce API response types.
//!
//! All types model the JSON structures returned by the store-locator and
//! timeslot endpoints. Field names follow the wire format's camelCase;
//! optional fields default so a sparse payload still deserializes.

use serde::Deserialize;

/// A store returned by the locator endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub state: String,
}

/// Top-level envelope for the store-locator response.
#[derive(Debug, Deserialize)]
pub struct LocatorResponse {
    #[serde(default)]
    pub stores: Vec<LocatorStore>,
}

/// One locator result: the store plus search metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorStore {
    #[serde(default)]
    pub distance: f32,
    pub store: Store,
    #[serde(default)]
    pub supports_med_timeslot: bool,
}

/// A single curbside/delivery window at a store.
///
/// `date` is kept as the provider's plain calendar-date string; the
/// per-date aggregation and its ordering are defined on that string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeslot {
    pub id: String,
    pub date: String,
    #[serde(rename = "allowAlcohol", default)]
    pub allows_alcohol: bool,
    #[serde(default)]
    pub store_id: String,
    #[serde(default)]
    pub fulfillment_type: String,
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub day_of_week: i32,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

/// Top-level envelope for the timeslot response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeslotResponse {
    #[serde(default)]
    pub pickup_store: Option<Store>,
    #[serde(default)]
    pub items: Vec<TimeslotItem>,
}

/// One timeslot entry; the date is duplicated alongside the slot itself.
#[derive(Debug, Deserialize)]
pub struct TimeslotItem {
    #[serde(default)]
    pub date: String,
    pub timeslot: Timeslot,
}
