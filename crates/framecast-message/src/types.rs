use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Interaction fields reported directly by the client.
///
/// None of this is authenticated. It is useful for routing and for local
/// development, but authorization decisions must only ever look at a
/// validated record produced from [`TrustedInteraction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedInteraction {
    /// Claimed Farcaster id of the interacting user.
    pub fid: u64,
    /// URL of the frame the interaction occurred on.
    pub url: String,
    /// Hash of the signed protocol message.
    pub message_hash: String,
    /// Client-reported interaction timestamp.
    pub timestamp: u64,
    /// Farcaster network id.
    pub network: u32,
    /// 1-based index of the tapped button, when a button was tapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_index: Option<u8>,
    /// Text entered into the frame's input field, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
    /// Connected wallet address, when the client shared one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Transaction hash or signature returned by a tx/signature flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Opaque state string threaded through by the frame server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// The opaque signed interaction payload.
///
/// Decoding requires a validation backend; this crate only checks that the
/// hex encoding itself is sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedInteraction {
    /// Hex-encoded signed protocol message.
    pub message_bytes: String,
}

impl TrustedInteraction {
    /// Decode the hex message bytes for submission to a backend.
    pub fn raw_bytes(&self) -> Result<Vec<u8>> {
        let stripped = self
            .message_bytes
            .strip_prefix("0x")
            .unwrap_or(&self.message_bytes);
        Ok(hex::decode(stripped)?)
    }
}

/// The wire-level unit received per interaction request.
///
/// Immutable once parsed; validation consumes it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    /// Signed payload requiring backend validation.
    pub trusted_data: TrustedInteraction,
    /// Client-reported interaction fields.
    pub untrusted_data: UntrustedInteraction,
}
