//! Structured logging
//!
//! Log events go to stderr so rendered documents printed on stdout stay
//! clean. `RUST_LOG` overrides the built-in filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,cms_scaffold=debug"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("cms_scaffold=debug"));
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init(false);
        assert!(init(false).is_err());
    }
}
