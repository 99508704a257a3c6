use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt as _};

/// Used when `RUST_LOG` is unset.
const DEFAULT_LOG_DIRECTIVES: &str = "jupiter_client=info,jupiter_models=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

/// Installs the global subscriber. Flattened JSON lines in prod, pretty JSON otherwise.
pub fn init_tracing(prod_format: bool) {
    if prod_format {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt::layer().json().flatten_event(true).with_ansi(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt::layer().json().pretty().with_ansi(true))
            .init();
    }
}
