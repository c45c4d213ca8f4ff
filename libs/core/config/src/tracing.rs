use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Default filter when `RUST_LOG` is unset in production
const PRODUCTION_FILTER: &str = "info,tower_http=info";

/// Default filter when `RUST_LOG` is unset in development
const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,hyper=info";

/// Install color-eyre for the binary's error reports.
///
/// Call this first in `main()`. Shows error locations, hides the
/// environment section. Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Pick the log filter: `RUST_LOG` wins, otherwise a per-environment default.
pub fn log_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new(PRODUCTION_FILTER)
        } else {
            EnvFilter::new(DEVELOPMENT_FILTER)
        }
    })
}

/// Initialize the global tracing subscriber.
///
/// - **Production** (`APP_ENV=production`): flattened JSON lines for log
///   aggregation, without module targets.
/// - **Development** (default): pretty, human-readable output.
///
/// Both include [`tracing_error::ErrorLayer`] so eyre reports carry span
/// traces. If a subscriber is already installed (common in tests) this is
/// a no-op.
pub fn init_tracing(environment: &Environment) {
    let filter = log_filter(environment);

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_per_environment() {
        temp_env::with_var_unset("RUST_LOG", || {
            let prod = log_filter(&Environment::Production).to_string();
            assert!(prod.contains("info") && !prod.contains("debug"), "{prod}");

            let dev = log_filter(&Environment::Development).to_string();
            assert!(dev.contains("debug"), "{dev}");
        });
    }

    #[test]
    fn test_log_filter_respects_rust_log() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            let filter = log_filter(&Environment::Production).to_string();
            assert_eq!(filter, "warn");
        });
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Production);
    }

    #[test]
    fn test_install_color_eyre_multiple_calls() {
        install_color_eyre();
        install_color_eyre();
    }
}
