//! Tracing subscriber setup.
//!
//! One global init point shared by the CLI and demo binaries. The default
//! directive targets the fipwatch crates; `RUST_LOG` overrides it when
//! set.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output profile for the global subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, `fipwatch=debug` by default
    Development,
    /// JSON lines, `fipwatch=info` by default
    Production,
    /// Subscriberless registry so test output stays clean
    Test,
}

impl Profile {
    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "fipwatch=debug",
            Profile::Production => "fipwatch=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global tracing subscriber for the selected profile.
///
/// Safe to call more than once; only the first call installs anything.
///
/// # Example
///
/// ```
/// use fipwatch_core::logging::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()))
        };
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter()).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter())
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        // Repeated calls must not panic on the installed global
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(Profile::Development.default_directive(), "fipwatch=debug");
        assert_eq!(Profile::Production.default_directive(), "fipwatch=info");
    }
}
