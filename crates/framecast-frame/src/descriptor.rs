use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of buttons a frame can carry.
pub const MAX_BUTTONS: usize = 4;

/// What tapping a button does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    /// POST the interaction back to the frame server.
    #[default]
    Post,
    /// Open an external URL.
    Link,
    /// Start a wallet transaction / signature flow; the target receives
    /// the follow-up callback carrying the signature.
    Tx,
    /// Mint against the target asset.
    Mint,
}

impl ButtonAction {
    /// Wire spelling used in meta tags.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonAction::Post => "post",
            ButtonAction::Link => "link",
            ButtonAction::Tx => "tx",
            ButtonAction::Mint => "mint",
        }
    }

    /// True when the action cannot render without a target URL.
    pub fn requires_target(self) -> bool {
        matches!(self, ButtonAction::Link | ButtonAction::Mint)
    }
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frame image aspect ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1.91:1, the wide default.
    #[default]
    #[serde(rename = "1.91:1")]
    Widescreen,
    /// 1:1 square.
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    /// Wire spelling used in meta tags.
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "1.91:1",
            AspectRatio::Square => "1:1",
        }
    }
}

/// One rendered button. Its index is its 1-based position in
/// [`FrameDescriptor::buttons`], not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    /// Button label shown to the user.
    pub label: String,
    /// Action performed on tap.
    pub action: ButtonAction,
    /// Action target URL, when the action takes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// A validated outbound frame.
///
/// Produced by [`crate::FrameConfig::build`], which guarantees the button
/// list is contiguous, at most [`MAX_BUTTONS`] long, and that every
/// link/mint button carries a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDescriptor {
    /// Frame image URL.
    pub image_url: String,
    /// Image aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Endpoint receiving the next interaction callback. When unset the
    /// client posts back to the frame's own URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
    /// Placeholder text; presence enables the input field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_placeholder: Option<String>,
    /// Buttons in render order (1-based indices on the wire).
    pub buttons: Vec<ButtonSpec>,
}
