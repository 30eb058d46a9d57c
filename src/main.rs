//! reqres_basics - prints the fixed API target
//!
//! Output, one per line: base URL, endpoint, expected status.
//! Diagnostics go to stderr at a fixed `warn` level; no env var is read.

use reqres_basics::ApiTarget;

use eyre::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let target = ApiTarget::default();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    target.render(&mut out)?;

    Ok(())
}
