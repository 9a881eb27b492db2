//! Hub backend: submit raw message bytes to a protocol hub for decoding
//! and signature verification. The hub's decoded body is authoritative;
//! nothing is re-derived from the untrusted section.

use serde::Deserialize;

use crate::config::HubConfig;
use crate::error::{BackendKind, Result, ValidateError};
use crate::record::{Interactor, Provenance, ValidatedInteraction};

const VALIDATE_PATH: &str = "/v1/validateMessage";

#[derive(Debug, Deserialize)]
pub(crate) struct HubResponse {
    valid: bool,
    message: Option<HubMessage>,
}

#[derive(Debug, Deserialize)]
struct HubMessage {
    data: HubMessageData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HubMessageData {
    fid: u64,
    frame_action_body: Option<FrameActionBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameActionBody {
    button_index: Option<u8>,
}

pub(crate) async fn validate(
    client: &reqwest::Client,
    config: &HubConfig,
    message_bytes: Vec<u8>,
) -> Result<ValidatedInteraction> {
    let url = format!("{}{VALIDATE_PATH}", config.base_url);
    tracing::debug!(url = %url, bytes = message_bytes.len(), "submitting message to hub");

    let response = client
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
        .body(message_bytes)
        .send()
        .await
        .map_err(|source| ValidateError::Request {
            backend: BackendKind::Hub,
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ValidateError::Status {
            backend: BackendKind::Hub,
            status: status.as_u16(),
        });
    }

    let raw: serde_json::Value =
        response
            .json()
            .await
            .map_err(|source| ValidateError::Request {
                backend: BackendKind::Hub,
                source,
            })?;

    decode_response(raw)
}

/// Turn a 2xx hub body into a record, or the error it actually represents.
pub(crate) fn decode_response(raw: serde_json::Value) -> Result<ValidatedInteraction> {
    let response: HubResponse =
        serde_json::from_value(raw.clone()).map_err(|_| ValidateError::MalformedResponse {
            backend: BackendKind::Hub,
            field: "valid",
        })?;

    if !response.valid {
        return Err(ValidateError::InvalidSignature {
            backend: BackendKind::Hub,
        });
    }

    let data = response
        .message
        .map(|m| m.data)
        .ok_or(ValidateError::MalformedResponse {
            backend: BackendKind::Hub,
            field: "message.data",
        })?;

    let tapped_button = data
        .frame_action_body
        .and_then(|body| body.button_index)
        .filter(|&index| (1..=4).contains(&index));

    Ok(ValidatedInteraction::new(
        Interactor {
            fid: data.fid,
            username: None,
        },
        tapped_button,
        Provenance::Hub,
        raw,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "valid": true,
            "message": {
                "data": {
                    "fid": 417,
                    "frameActionBody": {"buttonIndex": 2}
                }
            }
        })
    }

    #[test]
    fn decodes_valid_response() {
        let record = decode_response(valid_body()).unwrap();
        assert_eq!(record.interactor.fid, 417);
        assert!(record.interactor.username.is_none());
        assert_eq!(record.tapped_button, Some(2));
        assert_eq!(record.provenance, Provenance::Hub);
        assert!(record.valid);
        assert_eq!(record.raw, valid_body());
    }

    #[test]
    fn invalid_verdict_is_an_error_not_a_record() {
        let result = decode_response(serde_json::json!({"valid": false}));
        assert!(matches!(
            result,
            Err(ValidateError::InvalidSignature {
                backend: BackendKind::Hub
            })
        ));
    }

    #[test]
    fn valid_without_decoded_message_is_malformed() {
        let result = decode_response(serde_json::json!({"valid": true}));
        assert!(matches!(
            result,
            Err(ValidateError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn out_of_range_button_index_is_dropped() {
        let mut body = valid_body();
        body["message"]["data"]["frameActionBody"]["buttonIndex"] = serde_json::json!(9);
        let record = decode_response(body).unwrap();
        assert_eq!(record.tapped_button, None);
    }

    #[test]
    fn missing_frame_action_body_yields_no_button() {
        let body = serde_json::json!({
            "valid": true,
            "message": {"data": {"fid": 99}}
        });
        let record = decode_response(body).unwrap();
        assert_eq!(record.tapped_button, None);
        assert_eq!(record.interactor.fid, 99);
    }

    #[test]
    fn unparseable_body_is_malformed() {
        let result = decode_response(serde_json::json!({"something": "else"}));
        assert!(matches!(
            result,
            Err(ValidateError::MalformedResponse { .. })
        ));
    }
}
