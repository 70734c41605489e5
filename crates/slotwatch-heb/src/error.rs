use thiserror::Error;

/// Errors returned by the HEB commerce API client.
///
/// The polling engine treats every variant as fatal for the current run;
/// there is no transparent retry.
#[derive(Debug, Error)]
pub enum HebError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("unexpected response for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
