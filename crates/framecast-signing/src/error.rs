/// Errors raised while building a signing request.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The payload could not be serialized to JSON.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SigningError>;
