use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::format::Formatters;

/// Fallback counts shown when the estimate document cannot be loaded.
pub const FALLBACK_AI_LINES: u64 = 11_200_000_000;
pub const FALLBACK_HUMAN_LINES: u64 = 23_900_000_000;

/// The estimate document as published at the endpoint.
///
/// Every field may be absent. The counts tolerate the loose typing seen in
/// hand-edited documents: floats are truncated, numeric strings parse, and
/// anything else coerces to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, deserialize_with = "coerce_count")]
    pub ai_lines: u64,
    #[serde(default, deserialize_with = "coerce_count")]
    pub human_lines: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Estimate {
    /// Combined line count across both categories.
    pub fn total(&self) -> u64 {
        self.ai_lines.saturating_add(self.human_lines)
    }

    /// Share of AI-written lines, 0.0 when there are no lines at all.
    pub fn ai_fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.ai_lines as f64 / total as f64
        }
    }

    /// Placeholder estimate substituted whenever the endpoint is unreachable
    /// or the document fails to decode.
    pub fn fallback() -> Self {
        Estimate {
            updated_at: Some(chrono::Utc::now().to_rfc3339()),
            scope: Some("Placeholder estimate".to_string()),
            ai_lines: FALLBACK_AI_LINES,
            human_lines: FALLBACK_HUMAN_LINES,
            notes: Some(
                "Fallback data bundled with linetally. Replace with real data at the estimate endpoint."
                    .to_string(),
            ),
        }
    }
}

fn coerce_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| if f.is_finite() && f > 0.0 { f as u64 } else { 0 }))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .or_else(|_| s.trim().parse::<f64>().map(|f| if f.is_finite() && f > 0.0 { f as u64 } else { 0 }))
            .unwrap_or(0),
        _ => 0,
    })
}

/// Report projection for the one-shot `--json` mode: raw values alongside
/// their display strings.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub ai_lines: u64,
    pub ai_lines_display: String,
    pub human_lines: u64,
    pub human_lines_display: String,
    pub total_lines: u64,
    pub total_lines_display: String,
    pub ai_fraction: f64,
    pub ai_share_display: String,
}

impl EstimateReport {
    pub fn new(estimate: &Estimate, fmt: &Formatters) -> Self {
        let total = estimate.total();
        let fraction = estimate.ai_fraction();
        EstimateReport {
            updated_at: estimate.updated_at.clone(),
            scope: estimate.scope.clone(),
            notes: estimate.notes.clone(),
            ai_lines: estimate.ai_lines,
            ai_lines_display: fmt.count(estimate.ai_lines),
            human_lines: estimate.human_lines,
            human_lines_display: fmt.count(estimate.human_lines),
            total_lines: total,
            total_lines_display: fmt.count(total),
            ai_fraction: fraction,
            ai_share_display: fmt.percent(fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_is_zero_without_lines() {
        let estimate: Estimate = serde_json::from_str("{}").unwrap();
        assert_eq!(estimate.total(), 0);
        assert_eq!(estimate.ai_fraction(), 0.0);
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let estimate: Estimate =
            serde_json::from_str(r#"{"scope": "repo scan", "ai_lines": 42}"#).unwrap();
        assert_eq!(estimate.ai_lines, 42);
        assert_eq!(estimate.human_lines, 0);
        assert_eq!(estimate.scope.as_deref(), Some("repo scan"));
        assert_eq!(estimate.updated_at, None);
        assert_eq!(estimate.notes, None);
    }

    #[test]
    fn test_count_coercion() {
        let estimate: Estimate =
            serde_json::from_str(r#"{"ai_lines": "1200", "human_lines": 3.9}"#).unwrap();
        assert_eq!(estimate.ai_lines, 1200);
        assert_eq!(estimate.human_lines, 3);

        let garbage: Estimate =
            serde_json::from_str(r#"{"ai_lines": "lots", "human_lines": null}"#).unwrap();
        assert_eq!(garbage.ai_lines, 0);
        assert_eq!(garbage.human_lines, 0);

        let negative: Estimate = serde_json::from_str(r#"{"ai_lines": -5}"#).unwrap();
        assert_eq!(negative.ai_lines, 0);
    }

    #[test]
    fn test_derived_values() {
        let estimate: Estimate =
            serde_json::from_str(r#"{"ai_lines": 100, "human_lines": 300}"#).unwrap();
        assert_eq!(estimate.total(), 400);
        assert_eq!(estimate.ai_fraction(), 0.25);
    }

    #[test]
    fn test_fallback_literal() {
        let fallback = Estimate::fallback();
        assert_eq!(fallback.ai_lines, FALLBACK_AI_LINES);
        assert_eq!(fallback.human_lines, FALLBACK_HUMAN_LINES);
        assert_eq!(fallback.scope.as_deref(), Some("Placeholder estimate"));
        assert!(fallback.notes.unwrap().starts_with("Fallback data"));
        assert!(fallback.updated_at.is_some());
    }

    #[test]
    fn test_report_projection() {
        let estimate: Estimate =
            serde_json::from_str(r#"{"ai_lines": 100, "human_lines": 300}"#).unwrap();
        let report = EstimateReport::new(&estimate, &Formatters::default());
        assert_eq!(report.total_lines, 400);
        assert_eq!(report.ai_lines_display, "100");
        assert_eq!(report.human_lines_display, "300");
        assert_eq!(report.ai_share_display, "25.0%");
    }
}
