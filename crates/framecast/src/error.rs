use framecast_frame::ErrorDescriptor;

/// Any failure on the path from inbound callback to outbound descriptor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The inbound body was not a well-formed interaction payload.
    #[error(transparent)]
    Message(#[from] framecast_message::MessageError),

    /// Trust validation failed.
    #[cfg(feature = "validate")]
    #[error(transparent)]
    Validate(#[from] framecast_validate::ValidateError),

    /// Frame configuration was invalid.
    #[error(transparent)]
    Frame(#[from] framecast_frame::FrameConfigError),

    /// Signing request construction failed.
    #[error(transparent)]
    Signing(#[from] framecast_signing::SigningError),
}

impl Error {
    /// Map a failure to the user-visible descriptor for the frame client.
    ///
    /// One consistent mapping: malformed structure is a 400, a rejected
    /// signature is a 403, an unreachable backend is a 503 with a retry
    /// hint, and programmer errors (frame config, signing) are a generic
    /// 500 that leaks no internals. A rejected signature is never worded
    /// as transient.
    pub fn to_descriptor(&self) -> ErrorDescriptor {
        match self {
            Error::Message(err) => ErrorDescriptor::with_status(err.to_string(), 400),
            #[cfg(feature = "validate")]
            Error::Validate(err) => descriptor_for_validate(err),
            Error::Frame(_) | Error::Signing(_) => {
                ErrorDescriptor::with_status("internal error", 500)
            }
        }
    }
}

#[cfg(feature = "validate")]
fn descriptor_for_validate(err: &framecast_validate::ValidateError) -> ErrorDescriptor {
    use framecast_validate::ValidateError;

    match err {
        ValidateError::InvalidSignature { .. } => {
            ErrorDescriptor::with_status("frame message signature is invalid", 403)
        }
        ValidateError::Message(inner) => ErrorDescriptor::with_status(inner.to_string(), 400),
        err if err.is_transient() => ErrorDescriptor::with_status(
            "could not verify frame message, please try again",
            503,
        ),
        _ => ErrorDescriptor::with_status("internal error", 500),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_payload_maps_to_400() {
        let err = Error::from(framecast_message::MessageError::Constraint(
            "button index 9 out of range 1..=4".to_string(),
        ));
        let descriptor = err.to_descriptor();
        assert_eq!(descriptor.http_status, 400);
        assert!(descriptor.message.contains("button index 9"));
    }

    #[cfg(feature = "validate")]
    #[test]
    fn invalid_signature_maps_to_403_and_is_not_worded_as_transient() {
        let err = Error::from(framecast_validate::ValidateError::InvalidSignature {
            backend: framecast_validate::BackendKind::Hub,
        });
        let descriptor = err.to_descriptor();
        assert_eq!(descriptor.http_status, 403);
        assert!(!descriptor.message.contains("try again"));
    }

    #[cfg(feature = "validate")]
    #[test]
    fn backend_fault_maps_to_503_with_retry_hint() {
        let err = Error::from(framecast_validate::ValidateError::Status {
            backend: framecast_validate::BackendKind::Indexer,
            status: 502,
        });
        let descriptor = err.to_descriptor();
        assert_eq!(descriptor.http_status, 503);
        assert!(descriptor.message.contains("try again"));
    }

    #[cfg(feature = "validate")]
    #[test]
    fn missing_credentials_do_not_leak_details() {
        let err = Error::from(framecast_validate::ValidateError::MissingCredentials {
            backend: framecast_validate::BackendKind::Indexer,
        });
        let descriptor = err.to_descriptor();
        assert_eq!(descriptor.http_status, 500);
        assert_eq!(descriptor.message, "internal error");
    }

    #[test]
    fn frame_config_errors_do_not_leak_details() {
        let err = Error::from(framecast_frame::FrameConfigError::ButtonGap {
            index: 3,
            missing: 2,
        });
        let descriptor = err.to_descriptor();
        assert_eq!(descriptor.http_status, 500);
        assert_eq!(descriptor.message, "internal error");
    }
}
