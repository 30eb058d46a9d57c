//! reqres.in probe client
//!
//! Sends one GET to `base_url + end_point` and compares the status the
//! server answers with against the target's expected `status_code`.
//! A different status is reported, not raised; `check` turns it into an error.

use std::time::Instant;
use tracing::{info, warn};

use crate::models::config::{ApiTarget, ProbeConfig};
use crate::models::errors::{AppError, AppResult};
use crate::models::types::ProbeReport;
use crate::utils::constants::USER_AGENT;

/// HTTP client for probing the target endpoint
pub struct ReqresClient {
    client: reqwest::Client,
}

impl ReqresClient {
    pub fn new(config: &ProbeConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Request the target once and report what came back
    pub async fn probe(&self, target: &ApiTarget) -> AppResult<ProbeReport> {
        let url = target.url();
        info!("🔍 Probing {}", url);

        let started = Instant::now();
        let response = self.client.get(&url).send().await?;
        let latency_ms = started.elapsed().as_millis() as u64;

        let report = ProbeReport::new(
            url,
            target.status_code,
            response.status().as_u16(),
            latency_ms,
        );

        if report.matched {
            info!("{}", report.summary());
        } else {
            warn!("{}", report.summary());
        }

        Ok(report)
    }

    /// Like `probe`, but an unexpected status is an error
    pub async fn check(&self, target: &ApiTarget) -> AppResult<ProbeReport> {
        let report = self.probe(target).await?;
        if !report.matched {
            return Err(AppError::status_mismatch(
                &report.url,
                report.expected_status,
                report.actual_status,
            ));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    #[tokio::test]
    async fn test_probe_unreachable_port() {
        // Grab a free port, then release it so nothing listens there
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let client = ReqresClient::new(&ProbeConfig::default()).unwrap();
        let target = ApiTarget::default().with_base_url(format!("http://{}", addr));

        let err = client.probe(&target).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProbeConnectionFailed);
        assert!(err.code.is_retryable());
    }
}
