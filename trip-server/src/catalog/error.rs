//! Catalog client error types.

use super::types::ConvertError;

/// Errors from the catalog HTTP client and mock.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not parse as the expected JSON shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, kept for diagnostics
        body: Option<String>,
    },

    /// Catalog returned a non-success status code
    #[error("catalog API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid or missing API key
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Rate limited by the catalog API
    #[error("rate limited by catalog API")]
    RateLimited,

    /// A record could not be converted to a domain option
    #[error("invalid catalog record: {0}")]
    Convert(#[from] ConvertError),

    /// Mock fixture file missing or malformed
    #[error("bad fixture data: {0}")]
    Fixture(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "catalog API error 500: Internal Server Error");

        assert_eq!(
            CatalogError::Unauthorized.to_string(),
            "unauthorized (invalid API key)"
        );
        assert_eq!(
            CatalogError::RateLimited.to_string(),
            "rate limited by catalog API"
        );

        let err = CatalogError::Convert(ConvertError::UnknownMode("zeppelin".into()));
        assert_eq!(
            err.to_string(),
            "invalid catalog record: unknown transport mode: zeppelin"
        );
    }
}
