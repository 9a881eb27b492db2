//! Inbound frame interaction wire model and parser.
//!
//! A frame client POSTs one JSON document per user interaction:
//! an untrusted section echoing what the client claims happened, and a
//! trusted section carrying the opaque signed message bytes. This crate
//! decodes that document into typed values without any network I/O; the
//! signed bytes stay opaque here and are resolved by a validation backend.

pub mod error;
pub mod parser;
pub mod types;

pub use error::{MessageError, Result};
pub use parser::{parse, parse_str, parse_with_config, ParseConfig, MAX_BUTTON_INDEX};
pub use types::{InboundMessage, TrustedInteraction, UntrustedInteraction};
