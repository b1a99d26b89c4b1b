use crate::config::TelemetryConfig;
use std::env;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidLogLevel { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidLogLevel { value, .. } => write!(
                f,
                "SCREENING_LOG_LEVEL '{}' is not a valid tracing filter",
                value
            ),
            TelemetryError::Subscriber(err) => {
                write!(f, "could not install the screening log subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidLogLevel { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the rendered report or JSON.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = screening_filter(env::var("RUST_LOG").ok().as_deref(), config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// A usable `RUST_LOG` wins; otherwise the configured level must parse.
fn screening_filter(
    rust_log: Option<&str>,
    config: &TelemetryConfig,
) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidLogLevel {
        value: config.log_level.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn configured_level_is_used_without_rust_log() {
        let filter = screening_filter(None, &config("debug")).expect("debug is a valid level");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn rust_log_overrides_configured_level() {
        let filter = screening_filter(Some("child_screening=trace"), &config("info"))
            .expect("directive parses");
        assert_eq!(filter.to_string(), "child_screening=trace");
    }

    #[test]
    fn invalid_configured_level_names_the_variable() {
        let err = screening_filter(None, &config("screening=loud"))
            .expect_err("level is not a tracing level");
        assert!(matches!(
            err,
            TelemetryError::InvalidLogLevel { ref value, .. } if value == "screening=loud"
        ));
        assert!(err.to_string().starts_with("SCREENING_LOG_LEVEL 'screening=loud'"));
    }
}
