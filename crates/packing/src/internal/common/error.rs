use thiserror::Error;

use crate::internal::common::resources::ResourceVector;

#[derive(Debug, Error)]
pub enum PackingError {
    /// The divisor of a scaling computation has a zero cpu, ram or disk dimension.
    /// This is always a bug on the caller side.
    #[error("Division by 0: container shape {0} has an empty dimension")]
    InvalidDivisor(ResourceVector),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    #[error("Error: {0}")]
    GenericError(String),
}

impl From<toml::de::Error> for PackingError {
    fn from(error: toml::de::Error) -> Self {
        Self::DeserializationError(error.to_string())
    }
}
