//! Outbound frame descriptor construction and serialization.
//!
//! A frame response is a small structured document: an image, up to four
//! buttons, an optional input field, and a post-back URL. Clients render it
//! from `fc:frame` meta tags and reject documents with missing or surplus
//! properties, so construction is validated up front and serialization emits
//! exactly the expected property set.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod meta;
pub mod responder;

pub use config::{ButtonConfig, FrameConfig};
pub use descriptor::{AspectRatio, ButtonAction, ButtonSpec, FrameDescriptor, MAX_BUTTONS};
pub use error::{FrameConfigError, Result};
pub use meta::FRAME_VERSION;
pub use responder::{ErrorDescriptor, DEFAULT_ERROR_STATUS};
