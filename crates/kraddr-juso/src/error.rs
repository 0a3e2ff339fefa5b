use thiserror::Error;

/// Errors returned by the Juso address-search client.
///
/// Service-level failures (`errorCode`/`errorMessage` in the body) are not
/// errors here; they come back as data in [`crate::Common`].
#[derive(Debug, Error)]
pub enum JusoError {
    /// No confirm key was supplied and none was configured. Raised before
    /// any request is sent.
    #[error("confirm key missing: pass SearchOptions::confirm_key or set JUSO_CONFIRM_KEY")]
    MissingConfirmKey,

    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
