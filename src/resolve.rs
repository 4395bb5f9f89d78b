//! Last-writer-wins resolution of leader traits over modification records.
//!
//! Nothing here caches: every call folds the store's current list, so a
//! reload shows up on the next read.

use crate::models::{
    AggressionLevel, DevelopmentLevel, LeaderIdentity, LeaderModification, MilitarismLevel,
};
use crate::registry::ModificationStore;

/// Fold ordered overrides over a default; every present value replaces the
/// running one, absent values are skipped.
///
/// ```
/// use leaderpix::resolve::resolve_override;
///
/// assert_eq!(resolve_override(1, [None, Some(2), None, Some(3)]), 3);
/// assert_eq!(resolve_override(1, [None, None]), 1);
/// ```
pub fn resolve_override<T>(default: T, overrides: impl IntoIterator<Item = Option<T>>) -> T {
    overrides.into_iter().flatten().fold(default, |_, value| value)
}

/// Resolve one field across `identity`'s records.
fn resolve_field<T>(
    store: &ModificationStore,
    identity: LeaderIdentity,
    default: T,
    field: impl Fn(&LeaderModification) -> Option<T>,
) -> T {
    let records = store.modifications_for(identity);
    resolve_override(default, records.iter().map(|record| field(record.as_ref())))
}

pub fn resolve_name(store: &ModificationStore, identity: LeaderIdentity, default: &str) -> String {
    resolve_field(store, identity, default.to_string(), |m| m.name.clone())
}

pub fn resolve_aggression(
    store: &ModificationStore,
    identity: LeaderIdentity,
    default: AggressionLevel,
) -> AggressionLevel {
    resolve_field(store, identity, default, |m| m.aggression)
}

pub fn resolve_development(
    store: &ModificationStore,
    identity: LeaderIdentity,
    default: DevelopmentLevel,
) -> DevelopmentLevel {
    resolve_field(store, identity, default, |m| m.development)
}

pub fn resolve_militarism(
    store: &ModificationStore,
    identity: LeaderIdentity,
    default: MilitarismLevel,
) -> MilitarismLevel {
    resolve_field(store, identity, default, |m| m.militarism)
}
