use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field '{field}'")]
    MissingConfigError { field: String },

    #[error("No active session; call login() first")]
    NoActiveSession,

    #[error("Server fault {fault_code}: {message}")]
    ServerFault { fault_code: i32, message: String },
}

pub type Result<T> = std::result::Result<T, InventoryError>;
