//! # Streaming Event Model
//!
//! Data labels for media published to a streaming service. The crate defines
//! the closed set of supported media types and the serde wiring that encodes
//! them in message payloads as their IANA media-type token rather than their
//! symbolic name.
//!
//! ```
//! use streaming_event_model::MediaType;
//!
//! let json = serde_json::to_string(&MediaType::AudioL16).unwrap();
//! assert_eq!(json, "\"audio/L16\"");
//!
//! let media_type: MediaType = serde_json::from_str("\"audio/L16\"").unwrap();
//! assert_eq!(media_type, MediaType::AudioL16);
//! ```

pub mod error;
pub mod media_type;

pub use error::{Error, Result};
pub use media_type::MediaType;
