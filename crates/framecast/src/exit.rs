use std::fmt;
use std::io;

use framecast_frame::FrameConfigError;
use framecast_message::MessageError;
use framecast_validate::ValidateError;

// Exit code vocabulary shared across subcommands.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const SIGNATURE_INVALID: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => FAILURE,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn message_error(context: &str, err: MessageError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameConfigError) -> CliError {
    CliError::new(USAGE, format!("{context}: {err}"))
}

pub fn validate_error(context: &str, err: ValidateError) -> CliError {
    let code = match &err {
        ValidateError::InvalidSignature { .. } => SIGNATURE_INVALID,
        ValidateError::Message(_) => DATA_INVALID,
        ValidateError::MissingCredentials { .. } | ValidateError::MissingEndpoint { .. } => USAGE,
        ValidateError::Request { source, .. } if source.is_timeout() => TIMEOUT,
        ValidateError::Request { .. } | ValidateError::Status { .. } => FAILURE,
        ValidateError::MalformedResponse { .. } | ValidateError::Client(_) => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}
