//! Mock validation for local development without live credentials.
//!
//! Synthesizes a record directly from the untrusted section. The record is
//! permanently labeled [`Provenance::Mock`]; nothing about it is verified.

use framecast_message::UntrustedInteraction;

use crate::record::{Interactor, Provenance, ValidatedInteraction};

pub(crate) fn synthesize(untrusted: &UntrustedInteraction) -> ValidatedInteraction {
    tracing::warn!(
        fid = untrusted.fid,
        "mock validation active: interaction is NOT cryptographically verified"
    );

    let raw = serde_json::to_value(untrusted).unwrap_or(serde_json::Value::Null);

    ValidatedInteraction::new(
        Interactor {
            fid: untrusted.fid,
            username: None,
        },
        untrusted.button_index,
        Provenance::Mock,
        raw,
    )
}
