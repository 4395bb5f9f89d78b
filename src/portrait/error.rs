//! Error types for portrait rendering

use thiserror::Error;

use crate::registry::ResourceError;

/// Error when building a portrait.
///
/// Bad modification artwork is never an error; it falls back to built-in
/// art. Only a missing atlas from the resource provider surfaces here.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PortraitError {
    /// The resource provider could not supply an atlas
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
