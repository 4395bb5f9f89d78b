//! Named paletted atlases supplied by the host's resource loader.

use std::collections::HashMap;
use thiserror::Error;

use crate::bitmap::Picture;

/// Error when looking up a resource.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ResourceError {
    /// No atlas is registered under this key
    #[error("Resource '{0}' not found")]
    NotFound(String),
}

/// Keyed lookup of paletted atlases.
///
/// Implemented by whatever loads the game's artwork. Sub-region extraction
/// happens on the returned [`Picture`].
pub trait ResourceProvider {
    /// Fetch the atlas stored under `key`.
    fn picture(&self, key: &str) -> Result<Picture, ResourceError>;
}

/// In-memory resource provider.
///
/// ```
/// use leaderpix::bitmap::Picture;
/// use leaderpix::palette::Palette;
/// use leaderpix::registry::{ResourceProvider, ResourceRegistry};
///
/// let mut registry = ResourceRegistry::new();
/// registry.register("SLAM2", Picture::new(320, 200, Palette::standard()));
///
/// assert!(registry.contains("SLAM2"));
/// assert_eq!(registry.picture("SLAM2").unwrap().dimensions(), (320, 200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    pictures: HashMap<String, Picture>,
}

impl ResourceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { pictures: HashMap::new() }
    }

    /// Register an atlas under `key`, replacing any previous one.
    pub fn register(&mut self, key: impl Into<String>, picture: Picture) {
        self.pictures.insert(key.into(), picture);
    }

    /// Remove an atlas, returning it if it was registered.
    pub fn remove(&mut self, key: &str) -> Option<Picture> {
        self.pictures.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pictures.contains_key(key)
    }

    /// Borrow an atlas without cloning it.
    pub fn get(&self, key: &str) -> Option<&Picture> {
        self.pictures.get(key)
    }

    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }

    pub fn clear(&mut self) {
        self.pictures.clear();
    }

    /// Registered keys, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.pictures.keys()
    }
}

impl ResourceProvider for ResourceRegistry {
    fn picture(&self, key: &str) -> Result<Picture, ResourceError> {
        self.pictures.get(key).cloned().ok_or_else(|| ResourceError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    #[test]
    fn test_registry_new_is_empty() {
        let registry = ResourceRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("KING00"));
    }

    #[test]
    fn test_register_and_fetch() {
        let mut registry = ResourceRegistry::new();
        let mut atlas = Picture::new(4, 4, Palette::standard());
        atlas.set_pixel(1, 1, 9);
        registry.register("KING00", atlas.clone());

        assert_eq!(registry.picture("KING00").unwrap(), atlas);
        assert_eq!(registry.names().count(), 1);
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = ResourceRegistry::new();
        registry.register("SLAM2", Picture::new(1, 1, Palette::standard()));
        registry.register("SLAM2", Picture::new(2, 2, Palette::standard()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("SLAM2").map(Picture::dimensions), Some((2, 2)));
    }

    #[test]
    fn test_missing_key() {
        let registry = ResourceRegistry::new();
        assert_eq!(
            registry.picture("KING99"),
            Err(ResourceError::NotFound("KING99".to_string()))
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let mut registry = ResourceRegistry::new();
        registry.register("A", Picture::new(1, 1, Palette::new()));
        registry.register("B", Picture::new(1, 1, Palette::new()));
        assert!(registry.remove("A").is_some());
        assert!(registry.remove("A").is_none());
        registry.clear();
        assert!(registry.is_empty());
    }
}
