//! Data models for leaders and the modification records that patch them.

mod leader;
mod levels;
mod modification;

// Re-export all public types
pub use leader::{ExpressionState, LeaderIdentity, LeaderProfile};
pub use levels::{AggressionLevel, DevelopmentLevel, MilitarismLevel};
pub use modification::LeaderModification;
