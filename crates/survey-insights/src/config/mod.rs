use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tooling.
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

/// Top-level configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub dataset: DatasetConfig,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("SURVEY_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let input_path = PathBuf::from(
            env::var("SURVEY_INPUT").unwrap_or_else(|_| "data/survey_responses.csv".to_string()),
        );
        let out_dir =
            PathBuf::from(env::var("SURVEY_OUT_DIR").unwrap_or_else(|_| "reports".to_string()));

        let top_n = env::var("SURVEY_TOP_N")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidTopN)?;

        let log_level = env::var("SURVEY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            dataset: DatasetConfig { input_path },
            output: OutputConfig { dir: out_dir, top_n },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the questionnaire export is read from.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub input_path: PathBuf,
}

/// Where report files land and how many ranked values breakdowns keep.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub top_n: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopN,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopN => write!(f, "SURVEY_TOP_N must be a positive integer"),
        }
    }
}

impl std::error::Error for ConfigError {}
