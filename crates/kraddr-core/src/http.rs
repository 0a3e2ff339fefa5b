//! HTTP client construction and the typed passthrough response.

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Builds the `reqwest::Client` shared by the address clients.
///
/// No overall request timeout is applied unless `timeout_secs` is set.
///
/// # Errors
///
/// Returns the underlying `reqwest::Error` if the client cannot be
/// constructed (e.g., invalid TLS config).
pub fn build_http_client(
    timeout_secs: Option<u64>,
    user_agent: &str,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent);
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

/// A transport response handed back unparsed, tagged with the JSON shape its
/// body is expected to have.
///
/// Nothing is read from the body until [`TypedResponse::json`] or
/// [`TypedResponse::text`] is called.
#[derive(Debug)]
pub struct TypedResponse<T> {
    inner: Response,
    _body: PhantomData<fn() -> T>,
}

impl<T> TypedResponse<T> {
    #[must_use]
    pub fn new(inner: Response) -> Self {
        Self {
            inner,
            _body: PhantomData,
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        self.inner.url()
    }

    /// Reads the body as text without interpreting it.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest::Error` raised while reading the body.
    pub async fn text(self) -> Result<String, reqwest::Error> {
        self.inner.text().await
    }

    #[must_use]
    pub fn into_inner(self) -> Response {
        self.inner
    }
}

impl<T: DeserializeOwned> TypedResponse<T> {
    /// Reads and decodes the body as the expected JSON shape.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest::Error` raised while reading or decoding the body.
    pub async fn json(self) -> Result<T, reqwest::Error> {
        self.inner.json::<T>().await
    }
}
