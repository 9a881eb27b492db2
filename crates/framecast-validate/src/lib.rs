//! Trust validation of signed frame interactions.
//!
//! The untrusted section of an inbound message is whatever the client chose
//! to send. The signed bytes are the only authenticated record of what the
//! user did, and decoding them requires a backend:
//!
//! - A **hub**, a decentralized protocol node exposing `validateMessage`.
//! - An **indexer**, a centralized API (API-key gated) returning richer
//!   resolved identity alongside the verdict.
//!
//! A [`Validator`] holds exactly one backend, chosen at construction; there
//! is no automatic failover between trust sources. A separate
//! [`ValidationMode`] can bypass the network entirely for local development,
//! producing records explicitly labeled [`Provenance::Mock`]. The mode is
//! derived from an explicit deployment signal; absence of a signal always
//! means live validation.

pub mod config;
pub mod error;
mod hub;
mod indexer;
mod mock;
pub mod mode;
pub mod record;
pub mod validator;

pub use config::{HubConfig, IndexerConfig, DEFAULT_TIMEOUT};
pub use error::{BackendKind, Result, ValidateError};
pub use mode::ValidationMode;
pub use record::{Interactor, Provenance, ValidatedInteraction};
pub use validator::{Backend, Validator};
