//! Behavioural trait levels carried by leaders.
//!
//! The game decides what these mean; this crate only stores and resolves them.

use serde::{Deserialize, Serialize};

/// How readily a leader goes to war.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggressionLevel {
    Friendly,
    #[default]
    Normal,
    Aggressive,
}

/// How a leader prefers to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentLevel {
    Perfectionist,
    #[default]
    Normal,
    Expansionistic,
}

/// How much a leader invests in the military.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilitarismLevel {
    Civilized,
    #[default]
    Normal,
    Militaristic,
}
