use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initializes logging. Call once at startup.
///
/// INFO by default, overridden by the RUST_LOG env var. Output goes to
/// stderr so piped report output stays clean.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_default_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
