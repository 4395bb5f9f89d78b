//! Configuration for portrait rendering
//!
//! Provides types and loading for `leaderpix.toml`.

pub mod loader;
pub mod schema;

pub use loader::{load_config, merge_overrides, ConfigError, ConfigOverrides};
pub use schema::*;
