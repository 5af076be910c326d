//! Tracing subscriber setup shared by the server and the admin CLI.

use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// `json` selects JSON lines, anything else plain text.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Builds the filter; `RUST_LOG` directives win over `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber for the server. Logs go to stdout.
pub fn init_tracing(log_level: &str, format: LogFormat) {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(log_level));

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Installs a plain subscriber for command line tools.
///
/// Logs go to stderr so they never mix with command output on stdout.
pub fn init_cli_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_log_format_from_name() {
        assert_eq!(LogFormat::from_name("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("text"), LogFormat::Text);
        assert_eq!(LogFormat::from_name("pretty"), LogFormat::Text);
    }

    #[test]
    #[serial]
    fn test_env_filter_uses_default_without_rust_log() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("RUST_LOG");
        }

        assert_eq!(env_filter("warn").to_string(), "warn");
    }

    #[test]
    #[serial]
    fn test_env_filter_prefers_rust_log() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("RUST_LOG", "shorturl=debug");
        }

        let filter = env_filter("warn");

        unsafe {
            env::remove_var("RUST_LOG");
        }

        assert_eq!(filter.to_string(), "shorturl=debug");
    }
}
