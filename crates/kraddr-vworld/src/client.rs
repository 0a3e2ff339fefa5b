//! HTTP client for the `VWorld` address-to-coordinate API.
//!
//! Issues one GET per lookup and returns the transport response typed as
//! [`GeocodeResponse`]. The body is never read here.

use kraddr_core::{
    build_http_client, AppConfig, TypedResponse, DEFAULT_USER_AGENT, DEFAULT_VWORLD_ENDPOINT,
};
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{GeocodeOptions, GeocodeResponse};

/// Client for the `VWorld` geocoding API.
///
/// Unlike the Juso client there is no default key: every call must carry
/// one in [`GeocodeOptions::key`].
pub struct VworldClient {
    client: Client,
    endpoint: Url,
}

impl VworldClient {
    /// Creates a client pointed at the production `VWorld` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, GeocodeError> {
        Self::with_endpoint(timeout_secs, DEFAULT_VWORLD_ENDPOINT)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(timeout_secs: Option<u64>, endpoint: &str) -> Result<Self, GeocodeError> {
        let client = build_http_client(timeout_secs, DEFAULT_USER_AGENT)?;
        Self::from_parts(client, endpoint)
    }

    /// Creates a client from resolved application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`VworldClient::with_endpoint`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeocodeError> {
        let client = build_http_client(config.request_timeout_secs, &config.user_agent)?;
        Self::from_parts(client, &config.vworld_endpoint)
    }

    fn from_parts(client: Client, endpoint: &str) -> Result<Self, GeocodeError> {
        let endpoint = Url::parse(endpoint).map_err(|e| GeocodeError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, endpoint })
    }

    /// Looks up coordinates for `address`.
    ///
    /// The response is returned unparsed; decode it with
    /// [`TypedResponse::json`] and inspect `response.status`. An unknown key
    /// or unmatched address still comes back as HTTP 200.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::MissingKey`] if `options.key` is empty; nothing is sent.
    /// - [`GeocodeError::Http`] on network failure.
    pub async fn get_coordinate(
        &self,
        address: &str,
        options: &GeocodeOptions,
    ) -> Result<TypedResponse<GeocodeResponse>, GeocodeError> {
        if options.key.is_empty() {
            return Err(GeocodeError::MissingKey);
        }

        let url = self.build_url(address, options);
        tracing::debug!(
            endpoint = %self.endpoint,
            address,
            address_type = options.address_type.map(|t| t.as_str()),
            "vworld: sending coordinate lookup"
        );

        let response = self.client.get(url).send().await?;
        Ok(TypedResponse::new(response))
    }

    /// Builds the request URL: fixed `service`/`request` pairs, the key,
    /// any set options, then the address. Values are form-urlencoded.
    fn build_url(&self, address: &str, options: &GeocodeOptions) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("service", "address");
            pairs.append_pair("request", "getCoord");
            pairs.append_pair("key", &options.key);
            for (k, v) in options.query_pairs() {
                pairs.append_pair(k, &v);
            }
            pairs.append_pair("address", address);
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
