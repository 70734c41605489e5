//! HTTP client for the HEB commerce API.
//!
//! Wraps `reqwest` with typed responses for the two endpoints the watcher
//! needs: the store locator and the per-store timeslot listing. Non-2xx
//! statuses surface as [`HebError::Http`]; bodies that do not match the
//! expected shape surface as [`HebError::Deserialize`] with the failing
//! operation named.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::HebError;
use crate::types::{LocatorResponse, Store, Timeslot, TimeslotResponse};

const DEFAULT_BASE_URL: &str = "https://www.heb.com/";
const LOCATOR_PATH: &str = "commerce-api/v1/store/locator/address";
const TIMESLOT_PATH: &str = "commerce-api/v1/timeslot/timeslots";
const USER_AGENT: &str = "slotwatch/0.1 (timeslot watcher)";

/// Request body for the store-locator endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LocatorRequest<'a> {
    address: &'a str,
    curbside_only: bool,
    radius: u32,
}

/// Client for the HEB commerce API.
///
/// Use [`HebClient::new`] for production or [`HebClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug)]
pub struct HebClient {
    client: Client,
    base_url: Url,
}

impl HebClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`HebError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, HebError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`HebError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`HebError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, HebError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Normalise: exactly one trailing slash so joins resolve against the
        // root instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| HebError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Locates stores within `radius_miles` of `zip`.
    ///
    /// Returns the stores in the order the API listed them. An empty list
    /// is a successful result, not an error; the caller decides whether
    /// "no stores in range" is fatal.
    ///
    /// # Errors
    ///
    /// - [`HebError::Http`] on network failure or non-2xx HTTP status.
    /// - [`HebError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn locate_stores(
        &self,
        zip: &str,
        radius_miles: u32,
    ) -> Result<Vec<Store>, HebError> {
        let url = self.endpoint(LOCATOR_PATH);
        let body = LocatorRequest {
            address: zip,
            curbside_only: false,
            radius: radius_miles,
        };

        tracing::debug!(%zip, radius_miles, "locating stores");
        let request = self.client.post(url).json(&body);
        let response: LocatorResponse = self
            .send_json(request, &format!("locateStores(zip={zip})"))
            .await?;

        Ok(response.stores.into_iter().map(|s| s.store).collect())
    }

    /// Fetches the open timeslots for a store.
    ///
    /// # Errors
    ///
    /// - [`HebError::Http`] on network failure or non-2xx HTTP status.
    /// - [`HebError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn get_store_timeslots(&self, store_id: &str) -> Result<Vec<Timeslot>, HebError> {
        let url = self.endpoint(TIMESLOT_PATH);

        tracing::debug!(store_id, "fetching timeslots");
        let request = self.client.get(url).query(&[("store_id", store_id)]);
        let response: TimeslotResponse = self
            .send_json(request, &format!("getTimeslots(store_id={store_id})"))
            .await?;

        Ok(response.items.into_iter().map(|i| i.timeslot).collect())
    }

    /// Resolves an endpoint path against the base URL.
    fn endpoint(&self, path: &str) -> Url {
        // The base URL always ends in "/" and the paths are relative, so
        // join cannot fail here.
        self.base_url.join(path).unwrap_or_else(|_| {
            let mut url = self.base_url.clone();
            url.set_path(path);
            url
        })
    }

    /// Sends the request, asserts a 2xx status, and parses the body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<T, HebError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| HebError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
