use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Feature not found: {0}")]
    FeatureNotFound(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid weight override '{0}'. Expected key=value, e.g. impact=0.3")]
    InvalidWeight(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PulseError>;
