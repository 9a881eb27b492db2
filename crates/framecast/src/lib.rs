//! Farcaster frame protocol toolkit.
//!
//! framecast lets a server-side application participate in the frame
//! protocol: parse a signed interaction callback, validate it against a
//! trust backend, and build the next frame descriptor or a typed-data
//! signing request.
//!
//! # Crate Structure
//!
//! - [`message`] — Inbound interaction wire model and parser
//! - [`validate`] — Trust validation via hub or indexer (behind `validate`
//!   feature, on by default)
//! - [`frame`] — Outbound frame descriptors and meta-tag serialization
//! - [`signing`] — EIP-712-style typed-data signing requests
//!
//! Failures at any stage convert into a user-visible [`frame::ErrorDescriptor`]
//! through [`Error::to_descriptor`].

pub mod error;

/// Re-export inbound message types.
pub mod message {
    pub use framecast_message::*;
}

/// Re-export frame descriptor types.
pub mod frame {
    pub use framecast_frame::*;
}

/// Re-export signing request types.
pub mod signing {
    pub use framecast_signing::*;
}

/// Re-export validation types (requires `validate` feature).
#[cfg(feature = "validate")]
pub mod validate {
    pub use framecast_validate::*;
}

pub use error::Error;
