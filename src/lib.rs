//! leaderpix - Leader portraits and modification overlays
//!
//! This library provides functionality to:
//! - Load layered leader modification records from JSONL / JSON5 streams
//! - Fold modification overrides over built-in names and trait levels
//! - Composite expression portraits from indexed leader atlases
//! - Cut small ruler icons from the shared icon grid
//! - Rebase and remap modification artwork onto the game palette
//! - Write rendered portraits to PNG

pub mod bitmap;
pub mod config;
pub mod leader;
pub mod models;
pub mod output;
pub mod palette;
pub mod parser;
pub mod portrait;
mod quantize;
pub mod registry;
pub mod resolve;

pub use leader::Leader;
