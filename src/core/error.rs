use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Most remote-content failures never surface as this type: the fetch chain
/// swallows them at each fallback boundary and only the caller-facing
/// operations (page load, transport exhaustion) report an error.
#[derive(Debug, Error)]
pub enum PreviewsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// No week could be determined by any resolution strategy.
    ///
    /// Fatal for the current page load only; the caller shows it inline and
    /// the scheduler keeps ticking.
    #[error("could not determine a preview week for the season")]
    WeekResolution,
}
