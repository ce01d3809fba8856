// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Attribute, Cleanliness, CompatibilityResult, CompatibilityTier, DietaryPreference, Drinking,
    GuestsPolicy, LifestyleProfile, ListingCandidate, MatchStatus, NewMatch, PetPreference,
    RankedListing, SleepSchedule, Smoking, UnsetPolicy, UserType, WorkSchedule,
};
pub use requests::{ListingEntry, RankListingsRequest, ScoreMatchRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankListingsResponse, ScoreResponse};
