use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum VgError {
    /// The HTTP request could not be built, sent, or its body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request URL could not be constructed from the configured base.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-success HTTP status.
    #[error("unexpected response status: {status} at {url} - body: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body was not valid JSON or did not match the expected envelope.
    #[error("malformed {resource} response: {source}")]
    MalformedResponse {
        /// The resource being decoded (e.g. `profile`).
        resource: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A string-encoded numeric field could not be parsed.
    #[error("invalid numeric value for `{field}`: {value:?}")]
    InvalidNumericField {
        /// The wire name of the offending field.
        field: &'static str,
        /// The offending value as received.
        value: String,
    },

    /// A string-encoded date field did not match `YYYY-MM-DDThh:mm:ss±hh:mm`.
    #[error("invalid timestamp for `{field}`: {value:?}")]
    InvalidTimestampField {
        /// The wire name of the offending field.
        field: &'static str,
        /// The offending value as received.
        value: String,
    },

    /// The diversification response carried no sector wrapper entry.
    #[error("diversification response contains no sector data")]
    EmptySectorData,

    /// Caller-supplied parameters were rejected before any request was made.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}
