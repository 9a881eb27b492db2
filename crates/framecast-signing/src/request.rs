use serde::{Deserialize, Serialize};

use crate::error::Result;

/// EIP-712 domain separator fields carried by a signing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataDomain {
    /// Signing domain name, typically the application name.
    pub name: String,
    /// Domain version string.
    pub version: String,
}

/// A typed-data object for the user's wallet to sign off-chain.
///
/// The message payload is opaque to this crate beyond being valid JSON;
/// semantic structure is the calling application's contract with its
/// signature verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningRequest {
    /// EVM chain id the signature is scoped to.
    pub chain_id: u64,
    /// Domain separator.
    pub domain: TypedDataDomain,
    /// The structured message to sign.
    pub message: serde_json::Value,
}

/// Build a signing request for a domain/version/chain triple and payload.
///
/// Fails only when the payload is not JSON-serializable; no semantic
/// inspection is performed.
pub fn signing_request<T: Serialize>(
    chain_id: u64,
    payload: &T,
    domain: &str,
    version: &str,
) -> Result<SigningRequest> {
    let message = serde_json::to_value(payload)?;
    Ok(SigningRequest {
        chain_id,
        domain: TypedDataDomain {
            name: domain.to_string(),
            version: version.to_string(),
        },
        message,
    })
}
