use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UiDataError {
    #[error("Serde error: {0}")]
    Serde(String),

    #[error("Missing field: {0}")]
    MissingField(String),
}
