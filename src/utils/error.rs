use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("Health service request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Health service returned status {status}: {message}")]
    ProviderError { status: u16, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, HealthError>;
