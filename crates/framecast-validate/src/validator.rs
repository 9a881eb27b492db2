use framecast_message::InboundMessage;

use crate::config::{HubConfig, IndexerConfig};
use crate::error::{Result, ValidateError};
use crate::mode::ValidationMode;
use crate::record::ValidatedInteraction;
use crate::{hub, indexer, mock};

/// The trust source a validator consults.
///
/// A closed set on purpose: a caller picks one backend per validator and
/// there is no automatic failover between trust sources with different
/// trust models.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Decentralized protocol hub.
    Hub(HubConfig),
    /// Centralized indexing API (API-key gated).
    Indexer(IndexerConfig),
}

impl Backend {
    fn timeout(&self) -> std::time::Duration {
        match self {
            Backend::Hub(config) => config.timeout,
            Backend::Indexer(config) => config.timeout,
        }
    }
}

/// Validates signed frame interactions against one configured backend.
///
/// Holds only read-only configuration and a connection pool; safe to share
/// across concurrent requests. Each call is a single bounded-timeout
/// attempt — retry policy, if any, belongs to the caller, since blind
/// retries against a verification endpoint must not mask a genuinely
/// invalid signature.
#[derive(Debug, Clone)]
pub struct Validator {
    backend: Backend,
    mode: ValidationMode,
    client: reqwest::Client,
}

impl Validator {
    /// A live validator backed by a hub.
    pub fn hub(config: HubConfig) -> Result<Self> {
        Self::with_backend(Backend::Hub(config))
    }

    /// A live validator backed by an indexer.
    pub fn indexer(config: IndexerConfig) -> Result<Self> {
        Self::with_backend(Backend::Indexer(config))
    }

    /// A validator for an explicit backend value.
    pub fn with_backend(backend: Backend) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(backend.timeout())
            .build()
            .map_err(ValidateError::Client)?;
        Ok(Self {
            backend,
            mode: ValidationMode::Live,
            client,
        })
    }

    /// Set the validation mode. The default is [`ValidationMode::Live`];
    /// pass the result of [`ValidationMode::from_deployment`] to tie mock
    /// activation to an explicit deployment signal.
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The currently configured mode.
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Resolve an inbound message into a validated interaction record.
    ///
    /// The only suspension point in the crate: one bounded network exchange
    /// with the configured backend (none at all in mock mode).
    pub async fn validate(&self, message: &InboundMessage) -> Result<ValidatedInteraction> {
        if self.mode.is_mock() {
            return Ok(mock::synthesize(&message.untrusted_data));
        }

        match &self.backend {
            Backend::Hub(config) => {
                let bytes = message.trusted_data.raw_bytes()?;
                hub::validate(&self.client, config, bytes).await
            }
            Backend::Indexer(config) => {
                indexer::validate(&self.client, config, &message.trusted_data.message_bytes)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use framecast_message::{parse_str, TrustedInteraction, UntrustedInteraction};

    use super::*;

    fn inbound() -> InboundMessage {
        InboundMessage {
            trusted_data: TrustedInteraction {
                message_bytes: "0a1b2c".to_string(),
            },
            untrusted_data: UntrustedInteraction {
                fid: 417,
                url: "https://frames.example/start".to_string(),
                message_hash: "0xabc".to_string(),
                timestamp: 1706243218,
                network: 1,
                button_index: Some(1),
                input_text: None,
                address: None,
                transaction_id: None,
                state: None,
            },
        }
    }

    #[tokio::test]
    async fn mock_mode_skips_the_network() {
        let validator = Validator::hub(HubConfig::new("http://127.0.0.1:1"))
            .unwrap()
            .with_mode(ValidationMode::Mock);

        let record = validator.validate(&inbound()).await.unwrap();
        assert!(record.is_mock());
        assert_eq!(record.interactor.fid, 417);
        assert_eq!(record.tapped_button, Some(1));
    }

    #[tokio::test]
    async fn live_mode_surfaces_unreachable_backend() {
        // Nothing listens on this port; the request must fail, not fall
        // back to mock data.
        let validator = Validator::hub(HubConfig::new("http://127.0.0.1:1")).unwrap();
        let result = validator.validate(&inbound()).await;

        match result {
            Err(err) => assert!(err.is_transient(), "expected a transient backend fault"),
            Ok(_) => panic!("unreachable backend must not validate"),
        }
    }

    #[tokio::test]
    async fn live_hub_mode_rejects_bad_hex_before_the_network() {
        let validator = Validator::hub(HubConfig::new("http://127.0.0.1:1")).unwrap();
        let mut message = inbound();
        message.trusted_data.message_bytes = "not hex".to_string();

        let result = validator.validate(&message).await;
        assert!(matches!(result, Err(ValidateError::Message(_))));
    }

    #[tokio::test]
    async fn mock_record_from_parsed_wire_body() {
        let body = serde_json::json!({
            "trustedData": {"messageBytes": "0a"},
            "untrustedData": {
                "fid": 9,
                "url": "https://frames.example/",
                "messageHash": "0x0",
                "timestamp": 0,
                "network": 1,
                "buttonIndex": 2
            }
        });
        let message = parse_str(&body.to_string()).unwrap();

        let validator = Validator::indexer(IndexerConfig::new("key").unwrap())
            .unwrap()
            .with_mode(ValidationMode::from_deployment(Some("development")));
        let record = validator.validate(&message).await.unwrap();

        assert!(record.is_mock());
        assert_eq!(record.tapped_button, Some(2));
    }
}
