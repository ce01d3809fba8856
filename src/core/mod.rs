// Core algorithm exports
pub mod ranker;
pub mod rules;
pub mod scoring;

pub use ranker::{MatchParty, Ranker, RankingResult};
pub use rules::{pair_score, Compatible};
pub use scoring::{attribute_score, calculate_compatibility, Scorer};
