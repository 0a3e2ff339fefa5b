use thiserror::Error;

/// Errors returned by the `VWorld` geocoding client.
///
/// An invalid key or an unmatched address is not an error here: the service
/// answers 200 and reports it in the body's `status`/`error` fields.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// No API key was supplied. Raised before any request is sent.
    #[error("VWorld key is required")]
    MissingKey,

    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
