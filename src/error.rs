use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The HTTP exchange with the gateway failed (network, TLS or non-2xx status).
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::TransportError(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for GatewayError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
