use std::fmt;

/// Which trust source an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Hub,
    Indexer,
    Mock,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendKind::Hub => "hub",
            BackendKind::Indexer => "indexer",
            BackendKind::Mock => "mock",
        })
    }
}

/// Errors raised while validating a signed interaction.
///
/// An explicitly invalid signature is its own variant: callers must be able
/// to tell "the backend said no" apart from "the backend was unreachable",
/// and neither may ever be downgraded to a successful record.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// The backend requires a credential that was not supplied.
    /// A configuration error, not a validation failure.
    #[error("missing credentials for {backend} backend")]
    MissingCredentials { backend: BackendKind },

    /// The backend requires a base URL that was not supplied.
    #[error("missing endpoint for {backend} backend")]
    MissingEndpoint { backend: BackendKind },

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// The network exchange with the backend failed.
    #[error("{backend} request failed: {source}")]
    Request {
        backend: BackendKind,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{backend} returned status {status}")]
    Status { backend: BackendKind, status: u16 },

    /// The backend answered 2xx but the body was not the expected shape.
    #[error("{backend} response missing {field}")]
    MalformedResponse {
        backend: BackendKind,
        field: &'static str,
    },

    /// The backend decoded the message and rejected its signature.
    #[error("{backend} rejected the message signature as invalid")]
    InvalidSignature { backend: BackendKind },

    /// The trusted payload could not be decoded before submission.
    #[error(transparent)]
    Message(#[from] framecast_message::MessageError),
}

impl ValidateError {
    /// The backend this error came from, when one was involved.
    pub fn backend(&self) -> Option<BackendKind> {
        match self {
            ValidateError::MissingCredentials { backend }
            | ValidateError::MissingEndpoint { backend }
            | ValidateError::Request { backend, .. }
            | ValidateError::Status { backend, .. }
            | ValidateError::MalformedResponse { backend, .. }
            | ValidateError::InvalidSignature { backend } => Some(*backend),
            ValidateError::Client(_) | ValidateError::Message(_) => None,
        }
    }

    /// True for backend faults a caller may reasonably retry.
    ///
    /// Never true for [`ValidateError::InvalidSignature`]: retrying a
    /// verification verdict cannot make an invalid message valid, and
    /// presenting it as transient would mislead the user.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ValidateError::Request { .. } | ValidateError::Status { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_signature_is_never_transient() {
        let err = ValidateError::InvalidSignature {
            backend: BackendKind::Hub,
        };
        assert!(!err.is_transient());
        assert_eq!(err.backend(), Some(BackendKind::Hub));
    }

    #[test]
    fn backend_status_is_transient() {
        let err = ValidateError::Status {
            backend: BackendKind::Indexer,
            status: 502,
        };
        assert!(err.is_transient());
    }

    #[test]
    fn missing_credentials_is_not_transient() {
        let err = ValidateError::MissingCredentials {
            backend: BackendKind::Indexer,
        };
        assert!(!err.is_transient());
    }
}
