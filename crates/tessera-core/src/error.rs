use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("field '{0}' missing from index schema")]
    MissingSchemaField(String),

    #[error("coordinate out of range: latitude={latitude}, longitude={longitude}")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },
}
