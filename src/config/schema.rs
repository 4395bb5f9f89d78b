//! Configuration schema types for `leaderpix.toml`
//!
//! Defines the structure and validation rules for portrait rendering settings.

use serde::{Deserialize, Serialize};

/// Graphics mode settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicsConfig {
    /// 256-colour mode. Decides which palette slots modification portraits
    /// are rebased into (64..80 when on, 1..16 when off).
    #[serde(default = "default_enhanced")]
    pub enhanced: bool,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self { enhanced: default_enhanced() }
    }
}

fn default_enhanced() -> bool {
    true
}

/// Resource naming settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Atlas holding the small ruler icons
    #[serde(default = "default_icon_atlas")]
    pub icon_atlas: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self { icon_atlas: default_icon_atlas() }
    }
}

fn default_icon_atlas() -> String {
    "SLAM2".to_string()
}

/// Root configuration structure for `leaderpix.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderpixConfig {
    #[serde(default)]
    pub graphics: GraphicsConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
}

/// Config validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl LeaderpixConfig {
    /// Validate the configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.resources.icon_atlas.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "resources.icon_atlas".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        errors
    }
}
