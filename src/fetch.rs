use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use tracing::{debug, error};

use crate::error::AppError;
use crate::estimate::Estimate;

/// Append a cache-defeating query parameter derived from the current time,
/// so stale CDN copies are skipped.
pub fn cache_busted(url: &str) -> String {
    let stamp = chrono::Utc::now().timestamp();
    if url.contains('?') {
        format!("{}&v={}", url, stamp)
    } else {
        format!("{}?v={}", url, stamp)
    }
}

/// Decode an estimate document body.
pub fn parse_estimate(body: &str) -> Result<Estimate, AppError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch the estimate document once. Non-success statuses, transport
/// failures, and decode failures are all errors; there is no partial data.
pub async fn fetch_estimate(url: &str) -> Result<Estimate, AppError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let request_url = cache_busted(url);
    debug!("requesting estimate from {}", request_url);

    let response = client
        .get(&request_url)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AppError::Status(response.status()));
    }

    let body = response.text().await?;
    let estimate = parse_estimate(&body)?;
    debug!(
        "loaded estimate: {} AI lines, {} human lines",
        estimate.ai_lines, estimate.human_lines
    );
    Ok(estimate)
}

/// Fetch the estimate, substituting the bundled placeholder on any failure.
/// The failure is logged once; callers always get something to render.
pub async fn load_or_fallback(url: &str) -> Estimate {
    match fetch_estimate(url).await {
        Ok(estimate) => estimate,
        Err(e) => {
            error!("failed to load estimate from {}: {}", url, e);
            Estimate::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::FALLBACK_AI_LINES;

    #[test]
    fn test_cache_buster_shape() {
        let busted = cache_busted("http://localhost:8080/data/estimate.json");
        let (base, query) = busted.split_once('?').unwrap();
        assert_eq!(base, "http://localhost:8080/data/estimate.json");
        let stamp = query.strip_prefix("v=").unwrap();
        assert_eq!(stamp.len(), 10);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_cache_buster_appends_to_existing_query() {
        let busted = cache_busted("http://localhost/estimate.json?key=abc");
        assert!(busted.starts_with("http://localhost/estimate.json?key=abc&v="));
    }

    #[test]
    fn test_parse_estimate_document() {
        let estimate = parse_estimate(
            r#"{"updated_at": "2025-11-02T10:00:00Z", "ai_lines": 100, "human_lines": 300}"#,
        )
        .unwrap();
        assert_eq!(estimate.ai_lines, 100);
        assert_eq!(estimate.human_lines, 300);
        assert_eq!(estimate.updated_at.as_deref(), Some("2025-11-02T10:00:00Z"));
    }

    #[test]
    fn test_parse_rejects_non_document() {
        assert!(parse_estimate("not json").is_err());
        assert!(parse_estimate("[1, 2, 3]").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back() {
        // Port 9 (discard) refuses connections on any sane host
        let estimate = load_or_fallback("http://127.0.0.1:9/data/estimate.json").await;
        assert_eq!(estimate.ai_lines, FALLBACK_AI_LINES);
        assert_eq!(estimate.scope.as_deref(), Some("Placeholder estimate"));
    }
}
