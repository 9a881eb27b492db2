use crate::error::{MessageError, Result};
use crate::types::InboundMessage;

/// Highest button index a frame can define.
pub const MAX_BUTTON_INDEX: u8 = 4;

/// Controls parser strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// When true, enforce field constraints beyond the structural shape:
    /// button index in 1..=4 and non-empty, hex-valid message bytes.
    /// Lenient parsing exists for replaying hand-written fixtures through
    /// mock validation; it still requires both wire sections to be present.
    pub strict: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Parse an inbound interaction body using strict checks.
pub fn parse(body: &[u8]) -> Result<InboundMessage> {
    parse_with_config(body, &ParseConfig::default())
}

/// Parse an inbound interaction body from a string slice.
pub fn parse_str(body: &str) -> Result<InboundMessage> {
    parse(body.as_bytes())
}

/// Parse with explicit configuration.
///
/// Pure and deterministic: no network I/O, no environment access.
pub fn parse_with_config(body: &[u8], config: &ParseConfig) -> Result<InboundMessage> {
    let message: InboundMessage = serde_json::from_slice(body)?;

    if config.strict {
        check_constraints(&message)?;
    }

    tracing::debug!(
        fid = message.untrusted_data.fid,
        button = ?message.untrusted_data.button_index,
        strict = config.strict,
        "parsed inbound frame message"
    );

    Ok(message)
}

fn check_constraints(message: &InboundMessage) -> Result<()> {
    if let Some(index) = message.untrusted_data.button_index {
        if index == 0 || index > MAX_BUTTON_INDEX {
            return Err(MessageError::Constraint(format!(
                "button index {index} out of range 1..={MAX_BUTTON_INDEX}"
            )));
        }
    }

    if message.trusted_data.message_bytes.is_empty() {
        return Err(MessageError::Constraint(
            "trusted message bytes are empty".to_string(),
        ));
    }

    // Surface bad hex at the parse boundary rather than mid-validation.
    message.trusted_data.raw_bytes()?;

    Ok(())
}
