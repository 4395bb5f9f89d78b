//! Collaborators borrowed for one portrait operation

use crate::config::LeaderpixConfig;
use crate::registry::{ModificationStore, ResourceProvider};

/// Everything a leader needs to resolve artwork.
///
/// Borrowed per call, so the store can be reloaded between calls without
/// leaders holding on to it.
///
/// # Example
///
/// ```
/// use leaderpix::config::LeaderpixConfig;
/// use leaderpix::portrait::PortraitContext;
/// use leaderpix::registry::{ModificationStore, ResourceRegistry};
///
/// let store = ModificationStore::new();
/// let resources = ResourceRegistry::new();
/// let config = LeaderpixConfig::default();
/// let ctx = PortraitContext::new(&store, &resources, &config);
/// assert!(ctx.enhanced_graphics());
/// ```
#[derive(Clone, Copy)]
pub struct PortraitContext<'a> {
    pub store: &'a ModificationStore,
    pub resources: &'a dyn ResourceProvider,
    pub config: &'a LeaderpixConfig,
}

impl<'a> PortraitContext<'a> {
    pub fn new(
        store: &'a ModificationStore,
        resources: &'a dyn ResourceProvider,
        config: &'a LeaderpixConfig,
    ) -> Self {
        Self { store, resources, config }
    }

    pub fn enhanced_graphics(&self) -> bool {
        self.config.graphics.enhanced
    }

    /// Resource id of the shared small-portrait atlas.
    pub fn icon_atlas(&self) -> &str {
        &self.config.resources.icon_atlas
    }
}
