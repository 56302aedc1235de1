use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Invalid threshold '{name}' = {value}: {reason}")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid category tip: {0}")]
    InvalidTip(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InsightsError>;
