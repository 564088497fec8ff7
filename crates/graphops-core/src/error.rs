use thiserror::Error;

/// Top-level error type for settings and dataset handling.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Missing setting: {key} (set it in the config file, as {env}, or on the command line)")]
    MissingSetting { key: &'static str, env: &'static str },

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    #[error("Dataset error: {0}")]
    Dataset(String),
}
