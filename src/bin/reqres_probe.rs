//! reqres_probe - checks that the target endpoint answers with the expected status
//!
//! Usage:
//!   cargo run --bin reqres_probe
//!
//! Environment:
//!   REQRES_BASE_URL     - Service root to probe (default: https://reqres.in)
//!   REQRES_TIMEOUT_SECS - Request timeout (default: 10)
//!   RUST_LOG            - Log level (default: info)

use reqres_basics::utils::constants::{APP_NAME, APP_VERSION};
use reqres_basics::{AppError, ProbeConfig, ReqresClient};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    info!("🚀 {} probe v{}", APP_NAME, APP_VERSION);

    let config = ProbeConfig::from_env()?;
    let target = config.target();
    info!("   Timeout: {}s", config.timeout.as_secs());

    let client = ReqresClient::new(&config)?;
    let report = client.probe(&target).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.matched {
        let err = AppError::status_mismatch(&report.url, report.expected_status, report.actual_status);
        error!("❌ {}", err);
        return Err(err.into());
    }

    info!("✅ Probe complete");
    Ok(())
}
