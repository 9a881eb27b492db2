/// Errors raised while decoding an inbound interaction payload.
///
/// Every variant is a structural client error: the body did not have the
/// shape the frame protocol promises. Nothing here is retryable.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The body is not valid JSON or is missing a required section.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed but violates a field constraint.
    #[error("malformed payload: {0}")]
    Constraint(String),

    /// The trusted message bytes are not valid hex.
    #[error("malformed payload: message bytes are not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, MessageError>;
