use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("SCREENING_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let raw_format = env::var("SCREENING_OUTPUT").unwrap_or_else(|_| "text".to_string());
        let format = OutputFormat::parse(&raw_format)
            .ok_or(ConfigError::InvalidOutputFormat { value: raw_format })?;

        let raw_pretty = env::var("SCREENING_PRETTY_JSON").unwrap_or_else(|_| "true".to_string());
        let pretty_json = raw_pretty
            .trim()
            .parse::<bool>()
            .map_err(|_| ConfigError::InvalidFlag {
                name: "SCREENING_PRETTY_JSON",
                value: raw_pretty.clone(),
            })?;

        let log_level = env::var("SCREENING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            output: OutputConfig {
                format,
                pretty_json,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Controls for the report written to stdout.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty_json: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidOutputFormat { value: String },
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutputFormat { value } => {
                write!(f, "SCREENING_OUTPUT must be 'text' or 'json', got '{value}'")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be 'true' or 'false', got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
