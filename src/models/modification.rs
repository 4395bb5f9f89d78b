//! Modification records patching a leader's defaults.

use serde::{Deserialize, Serialize};

use super::leader::LeaderIdentity;
use super::levels::{AggressionLevel, DevelopmentLevel, MilitarismLevel};

/// An externally supplied override for one leader.
///
/// Every field except `leader` is optional; absent fields leave earlier
/// values alone when records are layered. Artwork is kept as the encoded
/// image bytes and only decoded when a portrait is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderModification {
    /// The leader this record targets
    pub leader: LeaderIdentity,
    /// Display name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Large portrait image, base64 encoded in records
    #[serde(default, skip_serializing_if = "Option::is_none", with = "base64_image")]
    pub portrait: Option<Vec<u8>>,
    /// Small portrait image, base64 encoded in records
    #[serde(default, skip_serializing_if = "Option::is_none", with = "base64_image")]
    pub portrait_small: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggression: Option<AggressionLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development: Option<DevelopmentLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub militarism: Option<MilitarismLevel>,
}

impl LeaderModification {
    /// A record targeting `leader` that overrides nothing.
    pub fn new(leader: LeaderIdentity) -> Self {
        Self {
            leader,
            name: None,
            portrait: None,
            portrait_small: None,
            aggression: None,
            development: None,
            militarism: None,
        }
    }
}

/// Serde adapter storing image bytes as a base64 string.
mod base64_image {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s.trim()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
