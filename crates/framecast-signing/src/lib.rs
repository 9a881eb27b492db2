//! Typed-data signing requests.
//!
//! A frame can ask the user's wallet to sign a structured off-chain message
//! (EIP-712 style) instead of submitting a transaction. This crate builds
//! the request object the client hands to the wallet; the signed result
//! comes back on a later interaction as `transactionId`.

pub mod error;
pub mod request;

pub use error::{Result, SigningError};
pub use request::{signing_request, SigningRequest, TypedDataDomain};
