use crate::descriptor::ButtonAction;

/// Errors raised while validating a frame configuration.
///
/// These are programmer errors in the calling application, not client
/// input errors; the umbrella crate maps them to a generic descriptor so
/// details never leak to the frame client.
#[derive(Debug, thiserror::Error)]
pub enum FrameConfigError {
    /// Every frame requires an image URL.
    #[error("frame image is required")]
    MissingImage,

    /// A button slot is set while a lower slot is empty.
    #[error("button {index} is set but button {missing} is not (buttons must be contiguous from 1)")]
    ButtonGap { index: u8, missing: u8 },

    /// Link and mint buttons must name the URL they point at.
    #[error("button {index} has action {action} but no target")]
    MissingTarget { index: u8, action: ButtonAction },
}

pub type Result<T> = std::result::Result<T, FrameConfigError>;
