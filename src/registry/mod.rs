//! Registries the portrait pipeline reads from.
//!
//! This module provides:
//! - `ModificationStore` mapping leaders to their layered modification records
//! - `ModificationSource` for discovering records, with a JSONL/JSON5 `StreamSource`
//! - `ResourceProvider` and the in-memory `ResourceRegistry` for paletted atlases

mod resources;
mod source;
mod store;

// Re-export all public items from submodules
pub use resources::{ResourceError, ResourceProvider, ResourceRegistry};
pub use source::{ModificationSource, StreamSource};
pub use store::ModificationStore;
