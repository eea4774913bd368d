//! Media types of media published to the streaming service
//!
//! Values serialize as their IANA-registered media-type token (see
//! <https://www.iana.org/assignments/media-types/media-types.xhtml#audio>),
//! never as the variant name.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::Error;

/// Media type of media published to the streaming service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// 16-bit linear PCM audio (`audio/L16`)
    AudioL16,
}

impl MediaType {
    /// Every supported media type. Grows as new types are registered.
    pub const ALL: &'static [MediaType] = &[MediaType::AudioL16];

    /// Canonical media-type token used in serialized payloads
    pub const fn as_str(&self) -> &'static str {
        match self {
            MediaType::AudioL16 => "audio/L16",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    /// Resolves a wire string by exact, case-sensitive match against the
    /// canonical tokens. Anything else fails; there is no fallback value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio/L16" => Ok(MediaType::AudioL16),
            _ => Err(Error::UnrecognizedMediaType(s.to_string())),
        }
    }
}

// Payloads carry the media-type token as a plain string scalar, so both
// serde directions go through the same as_str/from_str table.
impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}
