//! Indexer backend: submit the hex message bytes to a centralized indexing
//! API. Same verdict as a hub, with richer resolved identity (username),
//! gated by an API key.

use serde::Deserialize;

use crate::config::IndexerConfig;
use crate::error::{BackendKind, Result, ValidateError};
use crate::record::{Interactor, Provenance, ValidatedInteraction};

const VALIDATE_PATH: &str = "/v2/farcaster/frame/validate";

#[derive(Debug, Deserialize)]
pub(crate) struct IndexerResponse {
    valid: bool,
    action: Option<IndexerAction>,
}

#[derive(Debug, Deserialize)]
struct IndexerAction {
    interactor: IndexerInteractor,
    tapped_button: Option<TappedButton>,
}

#[derive(Debug, Deserialize)]
struct IndexerInteractor {
    fid: u64,
    username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TappedButton {
    index: Option<u8>,
}

pub(crate) async fn validate(
    client: &reqwest::Client,
    config: &IndexerConfig,
    message_bytes_hex: &str,
) -> Result<ValidatedInteraction> {
    let url = format!("{}{VALIDATE_PATH}", config.base_url);
    tracing::debug!(url = %url, "submitting message to indexer");

    let response = client
        .post(&url)
        .header("api_key", &config.api_key)
        .json(&serde_json::json!({ "message_bytes_in_hex": message_bytes_hex }))
        .send()
        .await
        .map_err(|source| ValidateError::Request {
            backend: BackendKind::Indexer,
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ValidateError::Status {
            backend: BackendKind::Indexer,
            status: status.as_u16(),
        });
    }

    let raw: serde_json::Value =
        response
            .json()
            .await
            .map_err(|source| ValidateError::Request {
                backend: BackendKind::Indexer,
                source,
            })?;

    decode_response(raw)
}

/// Turn a 2xx indexer body into a record, or the error it represents.
pub(crate) fn decode_response(raw: serde_json::Value) -> Result<ValidatedInteraction> {
    let response: IndexerResponse =
        serde_json::from_value(raw.clone()).map_err(|_| ValidateError::MalformedResponse {
            backend: BackendKind::Indexer,
            field: "valid",
        })?;

    if !response.valid {
        return Err(ValidateError::InvalidSignature {
            backend: BackendKind::Indexer,
        });
    }

    let action = response.action.ok_or(ValidateError::MalformedResponse {
        backend: BackendKind::Indexer,
        field: "action",
    })?;

    let tapped_button = action
        .tapped_button
        .and_then(|button| button.index)
        .filter(|&index| (1..=4).contains(&index));

    Ok(ValidatedInteraction::new(
        Interactor {
            fid: action.interactor.fid,
            username: action.interactor.username,
        },
        tapped_button,
        Provenance::Indexer,
        raw,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "valid": true,
            "action": {
                "interactor": {"fid": 417, "username": "conley"},
                "tapped_button": {"index": 1}
            }
        })
    }

    #[test]
    fn decodes_valid_response() {
        let record = decode_response(valid_body()).unwrap();
        assert_eq!(record.interactor.fid, 417);
        assert_eq!(record.interactor.username.as_deref(), Some("conley"));
        assert_eq!(record.tapped_button, Some(1));
        assert_eq!(record.provenance, Provenance::Indexer);
    }

    #[test]
    fn invalid_verdict_is_an_error_not_a_record() {
        let result = decode_response(serde_json::json!({"valid": false, "action": null}));
        assert!(matches!(
            result,
            Err(ValidateError::InvalidSignature {
                backend: BackendKind::Indexer
            })
        ));
    }

    #[test]
    fn valid_without_action_is_malformed() {
        let result = decode_response(serde_json::json!({"valid": true}));
        assert!(matches!(
            result,
            Err(ValidateError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn missing_tapped_button_yields_none() {
        let body = serde_json::json!({
            "valid": true,
            "action": {"interactor": {"fid": 12, "username": null}}
        });
        let record = decode_response(body).unwrap();
        assert_eq!(record.tapped_button, None);
        assert!(record.interactor.username.is_none());
    }
}
