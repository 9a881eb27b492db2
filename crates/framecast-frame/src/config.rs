use crate::descriptor::{
    AspectRatio, ButtonAction, ButtonSpec, FrameDescriptor, MAX_BUTTONS,
};
use crate::error::{FrameConfigError, Result};

/// One button slot in a frame configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonConfig {
    /// Button label.
    pub label: String,
    /// Action performed on tap. Default: [`ButtonAction::Post`].
    pub action: ButtonAction,
    /// Action target URL.
    pub target: Option<String>,
}

impl ButtonConfig {
    /// A post-back button.
    pub fn post(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Post,
            target: None,
        }
    }

    /// An external link button.
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Link,
            target: Some(target.into()),
        }
    }

    /// A transaction/signature button. The target is the endpoint that
    /// receives the follow-up callback carrying the signature.
    pub fn tx(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Tx,
            target: Some(target.into()),
        }
    }

    /// A mint button.
    pub fn mint(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Mint,
            target: Some(target.into()),
        }
    }
}

/// Frame configuration enumerating every recognized option with its default.
///
/// The fixed-size slot array makes "more than four buttons" unrepresentable;
/// the remaining cardinality rules are checked by [`FrameConfig::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameConfig {
    /// Frame image URL. Required.
    pub image: String,
    /// Image aspect ratio. Default: 1.91:1.
    pub aspect_ratio: AspectRatio,
    /// Endpoint for post-back interactions.
    pub post_url: Option<String>,
    /// Input field placeholder; presence enables the text input.
    pub input_text: Option<String>,
    /// Button slots 1 through 4. Slots must be filled contiguously.
    pub buttons: [Option<ButtonConfig>; MAX_BUTTONS],
}

impl FrameConfig {
    /// Start a configuration from the required image URL.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Self::default()
        }
    }

    /// Validate and produce the frame descriptor. Pure; no side effects.
    pub fn build(self) -> Result<FrameDescriptor> {
        if self.image.is_empty() {
            return Err(FrameConfigError::MissingImage);
        }

        let mut buttons = Vec::new();
        let mut first_empty: Option<u8> = None;

        for (slot, button) in self.buttons.into_iter().enumerate() {
            let index = slot as u8 + 1;
            match button {
                None => {
                    first_empty.get_or_insert(index);
                }
                Some(button) => {
                    if let Some(missing) = first_empty {
                        return Err(FrameConfigError::ButtonGap { index, missing });
                    }
                    if button.action.requires_target() && button.target.is_none() {
                        return Err(FrameConfigError::MissingTarget {
                            index,
                            action: button.action,
                        });
                    }
                    buttons.push(ButtonSpec {
                        label: button.label,
                        action: button.action,
                        target: button.target,
                    });
                }
            }
        }

        tracing::debug!(
            buttons = buttons.len(),
            input = self.input_text.is_some(),
            "built frame descriptor"
        );

        Ok(FrameDescriptor {
            image_url: self.image,
            aspect_ratio: self.aspect_ratio,
            post_url: self.post_url,
            input_placeholder: self.input_text,
            buttons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_frame_defaults() {
        let descriptor = FrameConfig {
            image: "https://x/img.png".to_string(),
            post_url: Some("https://x/next".to_string()),
            buttons: [Some(ButtonConfig::post("hi")), None, None, None],
            ..FrameConfig::default()
        }
        .build()
        .unwrap();

        assert_eq!(descriptor.buttons.len(), 1);
        assert_eq!(descriptor.buttons[0].action, ButtonAction::Post);
        assert_eq!(descriptor.aspect_ratio, AspectRatio::Widescreen);
        assert_eq!(descriptor.post_url.as_deref(), Some("https://x/next"));
        assert!(descriptor.input_placeholder.is_none());
    }

    #[test]
    fn zero_buttons_is_valid() {
        let descriptor = FrameConfig::new("https://x/img.png").build().unwrap();
        assert!(descriptor.buttons.is_empty());
    }

    #[test]
    fn four_buttons_is_valid() {
        let descriptor = FrameConfig {
            image: "https://x/img.png".to_string(),
            buttons: [
                Some(ButtonConfig::post("a")),
                Some(ButtonConfig::post("b")),
                Some(ButtonConfig::post("c")),
                Some(ButtonConfig::link("d", "https://x/d")),
            ],
            ..FrameConfig::default()
        }
        .build()
        .unwrap();
        assert_eq!(descriptor.buttons.len(), 4);
    }

    #[test]
    fn rejects_button_gap() {
        let result = FrameConfig {
            image: "https://x/img.png".to_string(),
            buttons: [
                Some(ButtonConfig::post("one")),
                None,
                Some(ButtonConfig::post("three")),
                None,
            ],
            ..FrameConfig::default()
        }
        .build();

        assert!(matches!(
            result,
            Err(FrameConfigError::ButtonGap {
                index: 3,
                missing: 2
            })
        ));
    }

    #[test]
    fn rejects_link_without_target() {
        let result = FrameConfig {
            image: "https://x/img.png".to_string(),
            buttons: [
                Some(ButtonConfig::post("one")),
                Some(ButtonConfig {
                    label: "gh".to_string(),
                    action: ButtonAction::Link,
                    target: None,
                }),
                None,
                None,
            ],
            ..FrameConfig::default()
        }
        .build();

        assert!(matches!(
            result,
            Err(FrameConfigError::MissingTarget {
                index: 2,
                action: ButtonAction::Link
            })
        ));
    }

    #[test]
    fn rejects_mint_without_target() {
        let result = FrameConfig {
            image: "https://x/img.png".to_string(),
            buttons: [
                Some(ButtonConfig {
                    label: "mint".to_string(),
                    action: ButtonAction::Mint,
                    target: None,
                }),
                None,
                None,
                None,
            ],
            ..FrameConfig::default()
        }
        .build();

        assert!(matches!(result, Err(FrameConfigError::MissingTarget { .. })));
    }

    #[test]
    fn tx_without_target_is_valid() {
        let descriptor = FrameConfig {
            image: "https://x/img.png".to_string(),
            post_url: Some("https://x/sig".to_string()),
            buttons: [
                Some(ButtonConfig {
                    label: "sign".to_string(),
                    action: ButtonAction::Tx,
                    target: None,
                }),
                None,
                None,
                None,
            ],
            ..FrameConfig::default()
        }
        .build()
        .unwrap();
        assert_eq!(descriptor.buttons[0].action, ButtonAction::Tx);
    }

    #[test]
    fn rejects_missing_image() {
        let result = FrameConfig::default().build();
        assert!(matches!(result, Err(FrameConfigError::MissingImage)));
    }
}
