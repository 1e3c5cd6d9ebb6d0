use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default `RUST_LOG` filter when none is set in the environment.
pub const DEFAULT_LOG_FILTER: &str = "poetry_api=debug,poetry_db=debug,tower_http=debug";

/// Install the global tracing subscriber (`fmt` output, env filter).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
