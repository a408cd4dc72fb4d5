use std::fmt;

/// Errors surfaced by the embedding API. Scoring itself never errors
/// (invalid sequencing is a silent no-op in the reducer), so these only cover
/// malformed requests crossing the JSON boundary.
#[derive(Debug)]
pub enum ScoreError {
    InvalidParameter(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoreError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ScoreError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ScoreError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for ScoreError {}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            ScoreError::DeserializationError(err.to_string())
        } else {
            ScoreError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
