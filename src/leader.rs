//! Runtime leader instances.
//!
//! A [`Leader`] is built from its identity's static profile. Names and trait
//! levels can be changed by the player; reads always fold the current
//! modification store over those values, so modifications win and a store
//! reload is visible on the next read.

use crate::bitmap::Picture;
use crate::models::{
    AggressionLevel, DevelopmentLevel, ExpressionState, LeaderIdentity, LeaderProfile,
    MilitarismLevel,
};
use crate::portrait::{self, PortraitContext, LARGE_PORTRAIT_SIZE, SMALL_PORTRAIT_SIZE};
use crate::registry::ModificationStore;
use crate::resolve::{
    resolve_aggression, resolve_development, resolve_militarism, resolve_name,
};

/// One leader in an active game.
#[derive(Debug, Clone)]
pub struct Leader {
    identity: LeaderIdentity,
    name: String,
    aggression: AggressionLevel,
    development: DevelopmentLevel,
    militarism: MilitarismLevel,
    small_portrait: Picture,
    /// Leader atlas, loaded on the first built-in portrait request
    atlas: Option<Picture>,
    /// Rebased modification portrait; once set it is reused for every expression
    modification_portrait: Option<Picture>,
}

impl Leader {
    /// Build a leader with portrait artwork.
    ///
    /// The small portrait is resolved here and never again, even if the
    /// store is reloaded later. Trait levels start at `Normal`.
    pub fn new(identity: LeaderIdentity, ctx: &PortraitContext<'_>) -> portrait::Result<Self> {
        let small_portrait = portrait::small_portrait(ctx, identity)?;
        Ok(Self {
            identity,
            name: resolve_name(ctx.store, identity, identity.profile().default_name),
            aggression: AggressionLevel::Normal,
            development: DevelopmentLevel::Normal,
            militarism: MilitarismLevel::Normal,
            small_portrait,
            atlas: None,
            modification_portrait: None,
        })
    }

    /// Build a leader without portrait artwork; the small portrait is blank
    /// and trait levels keep their type defaults.
    pub fn minimal(identity: LeaderIdentity, store: &ModificationStore) -> Self {
        Self {
            identity,
            name: resolve_name(store, identity, identity.profile().default_name),
            aggression: AggressionLevel::default(),
            development: DevelopmentLevel::default(),
            militarism: MilitarismLevel::default(),
            small_portrait: portrait::blank(SMALL_PORTRAIT_SIZE),
            atlas: None,
            modification_portrait: None,
        }
    }

    /// Build a leader in whichever mode its profile calls for.
    pub fn for_identity(identity: LeaderIdentity, ctx: &PortraitContext<'_>) -> portrait::Result<Self> {
        if identity.has_artwork() {
            Self::new(identity, ctx)
        } else {
            Ok(Self::minimal(identity, ctx.store))
        }
    }

    pub fn identity(&self) -> LeaderIdentity {
        self.identity
    }

    pub fn profile(&self) -> &'static LeaderProfile {
        self.identity.profile()
    }

    /// Current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The profile name with modifications applied.
    pub fn default_name(&self, store: &ModificationStore) -> String {
        resolve_name(store, self.identity, self.profile().default_name)
    }

    pub fn aggression(&self, store: &ModificationStore) -> AggressionLevel {
        resolve_aggression(store, self.identity, self.aggression)
    }

    pub fn set_aggression(&mut self, level: AggressionLevel) {
        self.aggression = level;
    }

    pub fn development(&self, store: &ModificationStore) -> DevelopmentLevel {
        resolve_development(store, self.identity, self.development)
    }

    pub fn set_development(&mut self, level: DevelopmentLevel) {
        self.development = level;
    }

    pub fn militarism(&self, store: &ModificationStore) -> MilitarismLevel {
        resolve_militarism(store, self.identity, self.militarism)
    }

    pub fn set_militarism(&mut self, level: MilitarismLevel) {
        self.militarism = level;
    }

    /// The 27x33 portrait fixed at construction.
    pub fn small_portrait(&self) -> &Picture {
        &self.small_portrait
    }

    /// The 139x133 portrait for `state`.
    ///
    /// Modification artwork, when present and 139x133, wins and ignores
    /// `state`. The first one resolved is kept for the life of this leader.
    /// Without it the built-in atlas is composited, or a blank placeholder
    /// is returned for leaders that have no atlas.
    pub fn large_portrait(
        &mut self,
        ctx: &PortraitContext<'_>,
        state: ExpressionState,
    ) -> portrait::Result<Picture> {
        if let Some(cached) = &self.modification_portrait {
            return Ok(cached.clone());
        }

        if let Some(modified) = portrait::modification_portrait(ctx, self.identity) {
            self.modification_portrait = Some(modified.clone());
            return Ok(modified);
        }

        let profile = self.profile();
        let Some(atlas_id) = profile.atlas else {
            return Ok(portrait::blank(LARGE_PORTRAIT_SIZE));
        };

        let atlas = match self.atlas {
            Some(ref atlas) => atlas,
            None => {
                log::debug!("Loading portrait atlas {} for {:?}", atlas_id, self.identity);
                self.atlas.insert(ctx.resources.picture(atlas_id)?)
            }
        };

        Ok(portrait::compose_expression(atlas, profile.overlay, state))
    }
}
