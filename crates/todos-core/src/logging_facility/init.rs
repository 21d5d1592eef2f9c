//! Logging initialization

use std::str::FromStr;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

use super::test_capture::init_test_capture;

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Human-readable output at debug level
    #[default]
    Development,
    /// JSON lines at info level
    Production,
    /// No output; events go to the shared in-memory capture
    Test,
}

impl Profile {
    fn env_filter(default: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log profile: {}", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call has any effect, and a dispatcher installed by someone
/// else is left in place. `RUST_LOG` overrides the profile's default filter.
/// `Profile::Test` installs the same capture layer as
/// [`init_test_capture`](super::init_test_capture).
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(Profile::env_filter("todos=debug"))
                .with_writer(std::io::stderr)
                .try_init();
        }
        Profile::Production => {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(Profile::env_filter("todos=info"))
                .with_writer(std::io::stderr)
                .try_init();
        }
        Profile::Test => {
            init_test_capture();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_test_profile_shares_capture() {
        init(Profile::Test);
        let capture = init_test_capture();

        crate::log_op_start!("init_shared_capture_op");
        capture.assert_event_exists("init_shared_capture_op", "start");
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("prod".parse::<Profile>(), Ok(Profile::Production));
        assert_eq!("Development".parse::<Profile>(), Ok(Profile::Development));
        assert!("verbose".parse::<Profile>().is_err());
    }
}
