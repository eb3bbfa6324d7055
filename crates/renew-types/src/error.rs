use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoachError {
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("Email already submitted")]
    AlreadySubmitted,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for CoachError {
    fn from(e: serde_json::Error) -> Self {
        CoachError::Serialization(e.to_string())
    }
}
