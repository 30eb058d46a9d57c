//! Probe result types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one live request against the target
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub url: String,
    pub expected_status: u16,
    pub actual_status: u16,
    pub matched: bool,
    pub latency_ms: u64,
    pub checked_at: DateTime<Utc>,
}

impl ProbeReport {
    pub fn new(url: String, expected_status: u16, actual_status: u16, latency_ms: u64) -> Self {
        Self {
            url,
            expected_status,
            actual_status,
            matched: expected_status == actual_status,
            latency_ms,
            checked_at: Utc::now(),
        }
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} {} | URL: {} | Status: {} (expected {}) | {}ms",
            if self.matched { "✅" } else { "❌" },
            if self.matched { "MATCH" } else { "MISMATCH" },
            self.url,
            self.actual_status,
            self.expected_status,
            self.latency_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_matching() {
        let ok = ProbeReport::new("http://x/api/users".into(), 200, 200, 12);
        assert!(ok.matched);
        assert!(ok.summary().contains("MATCH"));

        let bad = ProbeReport::new("http://x/api/users".into(), 200, 404, 12);
        assert!(!bad.matched);
        assert!(bad.summary().contains("MISMATCH"));
    }

    #[test]
    fn test_report_serializes() {
        let report = ProbeReport::new("http://x/api/users".into(), 200, 200, 5);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["expected_status"], 200);
        assert_eq!(json["matched"], true);
        assert!(json["checked_at"].is_string());
    }
}
