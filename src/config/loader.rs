//! Configuration loading and discovery for `leaderpix.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::LeaderpixConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up on disk.
pub const CONFIG_FILE: &str = "leaderpix.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse leaderpix.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Programmatic overrides applied on top of the loaded file
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Force enhanced (256-colour) or classic graphics
    pub enhanced: Option<bool>,
    /// Use a different small-portrait atlas
    pub icon_atlas: Option<String>,
}

/// Find leaderpix.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for leaderpix.toml
/// 2. Check XDG_CONFIG_HOME/leaderpix/leaderpix.toml (or ~/.config/leaderpix/leaderpix.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find leaderpix.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("leaderpix").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find leaderpix.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a leaderpix.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("mods/leaderpix.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<LeaderpixConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(LeaderpixConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<LeaderpixConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: LeaderpixConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Merge overrides into a configuration; overrides take precedence.
pub fn merge_overrides(config: &mut LeaderpixConfig, overrides: &ConfigOverrides) {
    if let Some(enhanced) = overrides.enhanced {
        config.graphics.enhanced = enhanced;
    }

    if let Some(ref icon_atlas) = overrides.icon_atlas {
        config.resources.icon_atlas = icon_atlas.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents.as_bytes())
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[graphics]\nenhanced = false");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "");

        let subdir = temp.path().join("mods").join("leaders");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        assert_eq!(find_config_from(temp.path().to_path_buf()), None);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            r#"
[graphics]
enhanced = false

[resources]
icon_atlas = "ICONS2"
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert!(!config.graphics.enhanced);
        assert_eq!(config.resources.icon_atlas, "ICONS2");
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[graphics\nenhanced = ");
        assert!(matches!(load_config(Some(&config_path)), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_failure() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[resources]\nicon_atlas = \"\"");
        let err = load_config(Some(&config_path)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().contains("resources.icon_atlas"));
    }

    #[test]
    fn test_merge_overrides() {
        let mut config = LeaderpixConfig::default();
        let overrides =
            ConfigOverrides { enhanced: Some(false), icon_atlas: Some("ALT".to_string()) };
        merge_overrides(&mut config, &overrides);
        assert!(!config.graphics.enhanced);
        assert_eq!(config.resources.icon_atlas, "ALT");
    }

    #[test]
    fn test_merge_empty_overrides_keeps_config() {
        let mut config = LeaderpixConfig::default();
        merge_overrides(&mut config, &ConfigOverrides::default());
        assert_eq!(config, LeaderpixConfig::default());
    }
}
