use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Initialize the tracing subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &TracingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},tower_http=debug", config.level))
    });

    let layer = fmt::layer().with_target(true);

    if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .init();
    }

    tracing::debug!(
        level = %config.level,
        json_format = config.json_format,
        "Tracing initialized"
    );
}
