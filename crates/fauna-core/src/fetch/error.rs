//! Fetch error type for failure classification.

use std::fmt;

/// Error from a single API request (bad URL, curl failure, HTTP error, or
/// unparseable body). Used for logging and tests; the public fetch path
/// degrades every variant to an empty result set.
#[derive(Debug)]
pub enum FetchError {
    /// The endpoint URL did not parse.
    Url(url::ParseError),
    /// Curl reported an error (timeout, connection, TLS, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// Response body was not a JSON array of records.
    Json(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Url(e) => write!(f, "invalid endpoint URL: {}", e),
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Json(e) => write!(f, "malformed response body: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Url(e) => Some(e),
            FetchError::Curl(e) => Some(e),
            FetchError::Json(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::Url(e)
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Json(e)
    }
}
