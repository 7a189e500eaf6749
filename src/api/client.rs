//! HTTP API Client
//!
//! Functions for communicating with the mental health trends REST API.
//!
//! All endpoints are read-only GETs with no parameters, headers, or auth.
//! Failures collapse into a single `String` error describing whether the
//! request or the JSON parse failed; callers decide what to do with it.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://mental-health-project-bct5.onrender.com";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("mindtrends_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(url)
}

/// Normalize a base URL: remove trailing slash
fn normalize_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Aggregate insights headline returned by `/insights`.
///
/// Installed wholesale as a component's display state once the fetch
/// resolves; never mutated field-by-field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct InsightsSummary {
    pub summary: String,
    pub date_range: String,
}

/// One per-date record returned by `/timeseries`.
///
/// Records arrive in server order, assumed chronological; the client never
/// re-sorts them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub anxiety: f64,
    pub depression: f64,
    pub sleep_issues: f64,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// ============ API Functions ============

/// Fetch the aggregate insights headline
pub async fn fetch_insights() -> Result<InsightsSummary, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/insights", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the full per-date time series
pub async fn fetch_timeseries() -> Result<Vec<TimeSeriesPoint>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/timeseries", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/health", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_insights_payload() {
        let body = r#"{"summary":"Stable mood trends","date_range":"2024-01-01 to 2024-03-31"}"#;
        let parsed: InsightsSummary = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.summary, "Stable mood trends");
        assert_eq!(parsed.date_range, "2024-01-01 to 2024-03-31");
    }

    #[test]
    fn parses_timeseries_payload() {
        let body = r#"[{"date":"2024-01-01","anxiety":3,"depression":2,"sleep_issues":1}]"#;
        let parsed: Vec<TimeSeriesPoint> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].date, "2024-01-01");
        assert_eq!(parsed[0].anxiety, 3.0);
        assert_eq!(parsed[0].depression, 2.0);
        assert_eq!(parsed[0].sleep_issues, 1.0);
    }

    #[test]
    fn parses_empty_timeseries() {
        let parsed: Vec<TimeSeriesPoint> = serde_json::from_str("[]").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn rejects_malformed_timeseries() {
        let body = r#"{"summary":"not an array"}"#;
        assert!(serde_json::from_str::<Vec<TimeSeriesPoint>>(body).is_err());
    }

    #[test]
    fn rejects_insights_missing_fields() {
        let body = r#"{"summary":"no range"}"#;
        assert!(serde_json::from_str::<InsightsSummary>(body).is_err());
    }

    #[test]
    fn normalizes_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:8000/".to_string()), "http://localhost:8000");
        assert_eq!(normalize_base("http://localhost:8000".to_string()), "http://localhost:8000");
    }
}
