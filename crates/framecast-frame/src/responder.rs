use serde::{Deserialize, Serialize};

/// Default status for a handled business rejection.
///
/// Distinct from 5xx on purpose: the request was understood and refused,
/// not dropped by a server fault.
pub const DEFAULT_ERROR_STATUS: u16 = 403;

/// A user-visible rejection shown by the frame client.
///
/// Rendered as a non-advancing toast: the frame stays on its current
/// surface and the message is displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    /// Human-readable message displayed to the user.
    pub message: String,
    /// HTTP status carried alongside the body.
    #[serde(skip)]
    pub http_status: u16,
}

impl ErrorDescriptor {
    /// A rejection with the default business-error status.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_status(message, DEFAULT_ERROR_STATUS)
    }

    /// A rejection with an explicit status.
    pub fn with_status(message: impl Into<String>, http_status: u16) -> Self {
        Self {
            message: message.into(),
            http_status,
        }
    }

    /// The JSON body the frame client displays: `{"message": ...}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "message": self.message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_business_rejection() {
        let descriptor = ErrorDescriptor::new("wrong button!");
        assert_eq!(descriptor.http_status, 403);
        assert_eq!(descriptor.message, "wrong button!");
    }

    #[test]
    fn explicit_status_is_kept() {
        let descriptor = ErrorDescriptor::with_status("bad payload", 400);
        assert_eq!(descriptor.http_status, 400);
    }

    #[test]
    fn json_body_carries_only_the_message() {
        let descriptor = ErrorDescriptor::new("secret is incorrect!");
        assert_eq!(
            descriptor.to_json(),
            serde_json::json!({"message": "secret is incorrect!"})
        );
    }
}
