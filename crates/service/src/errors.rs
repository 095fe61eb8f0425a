use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("malformed storage: {0}")]
    MalformedStorage(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    /// `NotFound` carrying the user-facing message, e.g. `Book not found!`.
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found!", entity)) }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self { Self::Storage(e.to_string()) }
}
