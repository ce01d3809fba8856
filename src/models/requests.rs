use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{LifestyleProfile, ListingCandidate, UserType};

/// Request to compare two profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(alias = "profile_a", rename = "profileA")]
    pub profile_a: LifestyleProfile,
    #[serde(alias = "profile_b", rename = "profileB")]
    pub profile_b: LifestyleProfile,
}

/// One listing in a ranking request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListingEntry {
    #[serde(alias = "listing_id", rename = "listingId")]
    pub listing_id: i64,
    #[validate(length(min = 1))]
    #[serde(alias = "owner_id", rename = "ownerId")]
    pub owner_id: String,
    #[serde(default)]
    #[serde(alias = "owner_profile", rename = "ownerProfile")]
    pub owner_profile: Option<LifestyleProfile>,
}

impl From<ListingEntry> for ListingCandidate {
    fn from(entry: ListingEntry) -> Self {
        ListingCandidate {
            listing_id: entry.listing_id,
            owner_id: entry.owner_id,
            owner_profile: entry.owner_profile,
        }
    }
}

/// Request to rank listings for a viewer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankListingsRequest {
    #[serde(default)]
    #[serde(alias = "viewer_profile", rename = "viewerProfile")]
    pub viewer_profile: Option<LifestyleProfile>,
    #[validate(nested)]
    pub listings: Vec<ListingEntry>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a prospective match for persistence
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(alias = "user_type", rename = "userType")]
    pub user_type: UserType,
    pub profile: LifestyleProfile,
    #[validate(length(min = 1))]
    #[serde(alias = "target_user_id", rename = "targetUserId")]
    pub target_user_id: String,
    #[serde(alias = "target_profile", rename = "targetProfile")]
    pub target_profile: LifestyleProfile,
    #[serde(default)]
    #[serde(alias = "listing_id", rename = "listingId")]
    pub listing_id: Option<i64>,
}
