use anyhow::anyhow;
use interstellar_config::LoggingConfig;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;

/// Initialize tracing from configuration. `RUST_LOG` takes precedence over `logging.level`.
pub fn install_tracing_from_config(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| cfg.level.clone());
    let env_filter = EnvFilter::try_new(&filter)
        .map_err(|e| anyhow!("invalid log filter {filter:?}: {e}"))?;

    let installed = if cfg.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_timer(ChronoUtc::rfc_3339())
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .try_init()
    };

    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
