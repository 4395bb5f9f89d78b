//! Leader identities and their built-in profiles.

use serde::{Deserialize, Serialize};

/// A leader kind. Used purely as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderIdentity {
    Caesar,
    Hammurabi,
    Frederick,
    Ramesses,
    Lincoln,
    Alexander,
    Gandhi,
    Catherine,
    Shaka,
    Napoleon,
    Montezuma,
    Mao,
    Elizabeth,
    GenghisKhan,
    Barbarian,
}

/// Built-in configuration for a leader kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderProfile {
    /// Name shown when no modification renames the leader
    pub default_name: &'static str,
    /// Portrait atlas resource id; `None` for leaders without artwork
    pub atlas: Option<&'static str>,
    /// Where the expression overlay lands on the base portrait
    pub overlay: (u32, u32),
}

const fn ruler(default_name: &'static str, atlas: &'static str, x: u32, y: u32) -> LeaderProfile {
    LeaderProfile { default_name, atlas: Some(atlas), overlay: (x, y) }
}

/// Profiles in declaration order of [`LeaderIdentity`].
// TODO: overlay offsets are placeholders inside the base portrait; replace
// them with the measured mouth positions once the shipped atlases are available.
const PROFILES: [LeaderProfile; 15] = [
    ruler("Caesar", "KING00", 40, 66),
    ruler("Hammurabi", "KING01", 42, 71),
    ruler("Frederick", "KING02", 38, 64),
    ruler("Ramesses", "KING03", 41, 69),
    ruler("Abe Lincoln", "KING04", 39, 72),
    ruler("Alexander", "KING05", 43, 63),
    ruler("Gandhi", "KING06", 40, 68),
    ruler("Catherine", "KING07", 37, 65),
    ruler("Shaka", "KING08", 44, 70),
    ruler("Napoleon", "KING09", 41, 62),
    ruler("Montezuma", "KING10", 40, 74),
    ruler("Mao Tse Tung", "KING11", 39, 67),
    ruler("Elizabeth", "KING12", 42, 61),
    ruler("Genghis Khan", "KING13", 38, 69),
    LeaderProfile { default_name: "Barbarian", atlas: None, overlay: (0, 0) },
];

impl LeaderIdentity {
    /// Every leader kind, in declaration order.
    pub const ALL: [LeaderIdentity; 15] = [
        LeaderIdentity::Caesar,
        LeaderIdentity::Hammurabi,
        LeaderIdentity::Frederick,
        LeaderIdentity::Ramesses,
        LeaderIdentity::Lincoln,
        LeaderIdentity::Alexander,
        LeaderIdentity::Gandhi,
        LeaderIdentity::Catherine,
        LeaderIdentity::Shaka,
        LeaderIdentity::Napoleon,
        LeaderIdentity::Montezuma,
        LeaderIdentity::Mao,
        LeaderIdentity::Elizabeth,
        LeaderIdentity::GenghisKhan,
        LeaderIdentity::Barbarian,
    ];

    /// The built-in profile for this leader kind.
    pub fn profile(self) -> &'static LeaderProfile {
        &PROFILES[self as usize]
    }

    /// Whether this leader kind ships portrait artwork.
    pub fn has_artwork(self) -> bool {
        self.profile().atlas.is_some()
    }
}

/// Portrait mood selecting which overlay is composited onto the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionState {
    #[default]
    Neutral,
    Smiling,
    Angry,
}

impl ExpressionState {
    /// Parse an expression name; unknown names yield `None`.
    pub fn from_str(s: &str) -> Option<ExpressionState> {
        match s.to_lowercase().as_str() {
            "neutral" => Some(ExpressionState::Neutral),
            "smiling" => Some(ExpressionState::Smiling),
            "angry" => Some(ExpressionState::Angry),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table_matches_identity_order() {
        assert_eq!(LeaderIdentity::Caesar.profile().atlas, Some("KING00"));
        assert_eq!(LeaderIdentity::Gandhi.profile().default_name, "Gandhi");
        assert_eq!(LeaderIdentity::GenghisKhan.profile().atlas, Some("KING13"));
        assert_eq!(LeaderIdentity::Barbarian.profile().atlas, None);
    }

    #[test]
    fn test_all_rulers_have_numbered_atlases() {
        for (i, identity) in LeaderIdentity::ALL.iter().enumerate() {
            match identity.profile().atlas {
                Some(atlas) => assert_eq!(atlas, format!("KING{:02}", i)),
                None => assert_eq!(*identity, LeaderIdentity::Barbarian),
            }
        }
    }

    #[test]
    fn test_overlay_fits_inside_portrait() {
        for identity in LeaderIdentity::ALL {
            let (x, y) = identity.profile().overlay;
            assert!(x + 59 <= 139 && y + 49 <= 133, "{:?} overlay out of bounds", identity);
        }
    }

    #[test]
    fn test_identity_serde_names() {
        let json = serde_json::to_string(&LeaderIdentity::GenghisKhan).unwrap();
        assert_eq!(json, "\"genghis_khan\"");
        let parsed: LeaderIdentity = serde_json::from_str("\"gandhi\"").unwrap();
        assert_eq!(parsed, LeaderIdentity::Gandhi);
    }

    #[test]
    fn test_expression_from_str() {
        assert_eq!(ExpressionState::from_str("Smiling"), Some(ExpressionState::Smiling));
        assert_eq!(ExpressionState::from_str("angry"), Some(ExpressionState::Angry));
        assert_eq!(ExpressionState::from_str("neutral"), Some(ExpressionState::Neutral));
        assert_eq!(ExpressionState::from_str("sleepy"), None);
        assert_eq!(ExpressionState::from_str("smile"), None);
        assert_eq!(ExpressionState::from_str("happy"), None);
    }
}
