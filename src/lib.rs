//! Roommate Match - lifestyle compatibility scoring for a roommate marketplace
//!
//! This library compares two lifestyle profiles and produces a 0-100 score
//! with per-attribute factors, strengths and concerns. It also ranks room
//! listings for a viewer and drafts match records for storage.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility, MatchParty, Ranker, RankingResult, Scorer};
pub use crate::models::{Attribute, CompatibilityResult, CompatibilityTier, LifestyleProfile, UnsetPolicy};
