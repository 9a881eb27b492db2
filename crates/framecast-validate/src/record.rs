use serde::Serialize;

/// Resolved identity of the user behind a validated interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interactor {
    /// Stable numeric Farcaster id.
    pub fid: u64,
    /// Resolved handle, when the backend provides one (the hub does not).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Which trust source produced a record.
///
/// Mock records carry [`Provenance::Mock`] permanently: two records with
/// identical fields but different provenance are different facts, and
/// calling code gates on this rather than on field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Decoded and verified by a decentralized hub.
    Hub,
    /// Decoded and verified by a centralized indexer.
    Indexer,
    /// Synthesized from untrusted fields; never verified.
    Mock,
}

/// The canonical outcome of successful validation.
///
/// Only this crate constructs these: `#[non_exhaustive]` blocks literal
/// construction elsewhere, and the type is deliberately not `Deserialize`
/// so a record cannot be minted from arbitrary JSON. A record in hand means
/// the configured backend vouched for the interaction, or it is explicitly
/// labeled mock.
///
/// ```compile_fail
/// let forged: framecast_validate::ValidatedInteraction =
///     serde_json::from_value(serde_json::json!({
///         "interactor": {"fid": 666},
///         "tapped_button": null,
///         "valid": true,
///         "provenance": "hub",
///         "raw": {}
///     }))
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct ValidatedInteraction {
    /// Who interacted, per the backend.
    pub interactor: Interactor,
    /// Resolved 1-based button index, when a button was tapped.
    pub tapped_button: Option<u8>,
    /// Always true on a constructed record; an invalid verdict becomes an
    /// error instead.
    pub valid: bool,
    /// Which trust source produced this record.
    pub provenance: Provenance,
    /// Backend-specific response payload, kept opaque to the core.
    pub raw: serde_json::Value,
}

impl ValidatedInteraction {
    pub(crate) fn new(
        interactor: Interactor,
        tapped_button: Option<u8>,
        provenance: Provenance,
        raw: serde_json::Value,
    ) -> Self {
        Self {
            interactor,
            tapped_button,
            valid: true,
            provenance,
            raw,
        }
    }

    /// True when this record was synthesized without verification.
    pub fn is_mock(&self) -> bool {
        self.provenance == Provenance::Mock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_fields_differ_by_provenance() {
        let hub = ValidatedInteraction::new(
            Interactor {
                fid: 417,
                username: None,
            },
            Some(1),
            Provenance::Hub,
            serde_json::Value::Null,
        );
        let mock = ValidatedInteraction::new(
            Interactor {
                fid: 417,
                username: None,
            },
            Some(1),
            Provenance::Mock,
            serde_json::Value::Null,
        );

        assert_ne!(hub, mock);
        assert!(!hub.is_mock());
        assert!(mock.is_mock());
    }
}
