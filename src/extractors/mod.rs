//! Deterministic extractors that turn a raw command into an [`Intent`].
//!
//! - [`params`]: URL and search-query extraction
//! - [`intent`]: keyword-priority category classification
//!
//! [`Intent`]: crate::types::Intent

pub mod intent;
pub mod params;

pub use intent::{classify, parse_intent};
pub use params::extract;
