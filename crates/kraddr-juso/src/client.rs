//! HTTP client for the Juso address-search API.
//!
//! Both operations send the same form-encoded POST. [`JusoClient::search`]
//! decodes and normalizes the body; [`JusoClient::find`] hands the transport
//! response back untouched. Neither retries nor inspects the HTTP status.

use kraddr_core::{
    build_http_client, AppConfig, TypedResponse, DEFAULT_JUSO_ENDPOINT, DEFAULT_USER_AGENT,
};
use reqwest::{Client, Url};

use crate::error::JusoError;
use crate::normalize::normalize_search_response;
use crate::types::{RawSearchResponse, SearchOptions, SearchResponse};

/// Client for the Juso road-name address search API.
///
/// Holds an optional default confirm key, resolved once at startup (usually
/// from `JUSO_CONFIRM_KEY`), which [`JusoClient::search`] falls back to.
pub struct JusoClient {
    client: Client,
    endpoint: Url,
    default_confirm_key: Option<String>,
}

impl JusoClient {
    /// Creates a client pointed at the production Juso endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`JusoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        default_confirm_key: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, JusoError> {
        Self::with_endpoint(default_confirm_key, timeout_secs, DEFAULT_JUSO_ENDPOINT)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`JusoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`JusoError::InvalidEndpoint`] if `endpoint`
    /// is not a valid URL.
    pub fn with_endpoint(
        default_confirm_key: Option<&str>,
        timeout_secs: Option<u64>,
        endpoint: &str,
    ) -> Result<Self, JusoError> {
        let client = build_http_client(timeout_secs, DEFAULT_USER_AGENT)?;
        Self::from_parts(client, endpoint, default_confirm_key)
    }

    /// Creates a client from resolved application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`JusoClient::with_endpoint`].
    pub fn from_config(config: &AppConfig) -> Result<Self, JusoError> {
        let client = build_http_client(config.request_timeout_secs, &config.user_agent)?;
        Self::from_parts(
            client,
            &config.juso_endpoint,
            config.juso_confirm_key.as_deref(),
        )
    }

    fn from_parts(
        client: Client,
        endpoint: &str,
        default_confirm_key: Option<&str>,
    ) -> Result<Self, JusoError> {
        let endpoint = Url::parse(endpoint).map_err(|e| JusoError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            endpoint,
            default_confirm_key: default_confirm_key
                .filter(|k| !k.is_empty())
                .map(str::to_owned),
        })
    }

    /// Searches addresses and normalizes the result summary.
    ///
    /// Uses `options.confirm_key`, falling back to the client's default key.
    /// `common.currentPage`, `common.countPerPage` and `common.totalCount` are
    /// converted from strings to [`crate::SummaryNumber`]s. A service-side
    /// failure (`errorCode` other than `"0"`) is returned as data.
    ///
    /// # Errors
    ///
    /// - [`JusoError::MissingConfirmKey`] if no key is available; nothing is sent.
    /// - [`JusoError::Http`] on network failure or while reading the body.
    /// - [`JusoError::Deserialize`] if the body is not the expected JSON.
    pub async fn search(
        &self,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, JusoError> {
        let confirm_key = non_empty(options.confirm_key.as_deref())
            .or(self.default_confirm_key.as_deref())
            .ok_or(JusoError::MissingConfirmKey)?;

        let response = self.send(confirm_key, keyword, options).await?;
        let body = response.text().await?;
        let context = format!("addrLinkApi(keyword={keyword})");
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| JusoError::Deserialize {
                context: context.clone(),
                source: e,
            })?;
        normalize_search_response(value)
            .map_err(|e| JusoError::Deserialize { context, source: e })
    }

    /// Searches addresses and returns the transport response unparsed.
    ///
    /// Only `options.confirm_key` is consulted; the client's default key is
    /// never applied. The body keeps the service's string counters; decode
    /// it with [`TypedResponse::json`].
    ///
    /// # Errors
    ///
    /// - [`JusoError::MissingConfirmKey`] if `options.confirm_key` is absent
    ///   or empty; nothing is sent.
    /// - [`JusoError::Http`] on network failure.
    pub async fn find(
        &self,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<TypedResponse<RawSearchResponse>, JusoError> {
        let confirm_key =
            non_empty(options.confirm_key.as_deref()).ok_or(JusoError::MissingConfirmKey)?;
        let response = self.send(confirm_key, keyword, options).await?;
        Ok(TypedResponse::new(response))
    }

    async fn send(
        &self,
        confirm_key: &str,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<reqwest::Response, JusoError> {
        let current_page = options.current_page.to_string();
        let count_per_page = options.count_per_page.to_string();
        let form = build_form(confirm_key, keyword, options, &current_page, &count_per_page);

        tracing::debug!(
            endpoint = %self.endpoint,
            keyword,
            current_page = options.current_page,
            count_per_page = options.count_per_page,
            result_type = %options.result_type,
            "juso: sending address search"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&form[..])
            .send()
            .await?;
        Ok(response)
    }
}

/// Form fields in the order the service documents them. The service calls
/// the key `confmKey`.
fn build_form<'a>(
    confirm_key: &'a str,
    keyword: &'a str,
    options: &'a SearchOptions,
    current_page: &'a str,
    count_per_page: &'a str,
) -> [(&'static str, &'a str); 5] {
    [
        ("confmKey", confirm_key),
        ("currentPage", current_page),
        ("countPerPage", count_per_page),
        ("keyword", keyword),
        ("resultType", options.result_type.as_str()),
    ]
}

fn non_empty(key: Option<&str>) -> Option<&str> {
    key.filter(|k| !k.is_empty())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
