use thiserror::Error;

/// Application error types
///
/// Loader failures all collapse into the same user-visible outcome (the
/// bundled fallback estimate); the variants exist so logs can say which
/// stage gave up.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level HTTP failure (preserves reqwest::Error for logging)
    #[error("estimate request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status
    #[error("estimate endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
    /// The response body was not a valid estimate document
    #[error("failed to decode estimate document: {0}")]
    Decode(#[from] serde_json::Error),
    /// Saved configuration could not be read or written
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let error = AppError::Status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(
            error.to_string(),
            "estimate endpoint returned HTTP 404 Not Found"
        );
    }

    #[test]
    fn test_config_display() {
        let error = AppError::Config("no config directory".to_string());
        assert_eq!(error.to_string(), "configuration error: no config directory");
    }
}
