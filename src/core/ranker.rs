use crate::models::{
    CompatibilityTier, LifestyleProfile, ListingCandidate, MatchStatus, NewMatch, RankedListing,
    UserType,
};
use crate::core::scoring::{Scorer, FALLBACK_SCORE};

/// Result of ranking listings for a viewer
#[derive(Debug)]
pub struct RankingResult {
    pub listings: Vec<RankedListing>,
    pub total_candidates: usize,
}

/// One side of a prospective match
#[derive(Debug, Clone, Copy)]
pub struct MatchParty<'a> {
    pub user_id: &'a str,
    pub profile: &'a LifestyleProfile,
}

/// Orchestrates the two places scores are consumed: ranking listings on the
/// browse page and drafting match records for storage.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    scorer: Scorer,
}

impl Ranker {
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Rank listings by compatibility between the viewer and each owner
    ///
    /// Listings whose owner profile is unknown, or requests without a viewer
    /// profile, get the fallback score and no breakdown. Sorting is stable, so
    /// equal scores keep their input order.
    ///
    /// # Arguments
    /// * `viewer` - Profile of the browsing user, if they have one
    /// * `candidates` - Listings with their owner profiles
    /// * `limit` - Maximum number of listings to return
    pub fn rank_listings(
        &self,
        viewer: Option<&LifestyleProfile>,
        candidates: Vec<ListingCandidate>,
        limit: Option<usize>,
    ) -> RankingResult {
        let total_candidates = candidates.len();

        let mut listings: Vec<RankedListing> = candidates
            .into_iter()
            .map(|candidate| match (viewer, candidate.owner_profile.as_ref()) {
                (Some(viewer), Some(owner)) => {
                    let result = self.scorer.score(viewer, owner);
                    RankedListing {
                        listing_id: candidate.listing_id,
                        owner_id: candidate.owner_id,
                        compatibility_score: result.score,
                        tier: result.tier(),
                        strengths: result.strengths,
                        concerns: result.concerns,
                    }
                }
                _ => RankedListing {
                    listing_id: candidate.listing_id,
                    owner_id: candidate.owner_id,
                    compatibility_score: FALLBACK_SCORE,
                    tier: CompatibilityTier::from_score(FALLBACK_SCORE),
                    strengths: vec![],
                    concerns: vec![],
                },
            })
            .collect();

        // Highest score first
        listings.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

        if let Some(limit) = limit {
            listings.truncate(limit);
        }

        RankingResult {
            listings,
            total_candidates,
        }
    }

    /// Build a pending match record between the initiating user and a target
    ///
    /// The initiator's role decides who is the seeker and who the owner.
    pub fn draft_match(
        &self,
        initiator: MatchParty<'_>,
        initiator_type: UserType,
        target: MatchParty<'_>,
        listing_id: Option<i64>,
    ) -> NewMatch {
        let (seeker_id, owner_id) = match initiator_type {
            UserType::RoomSeeker => (initiator.user_id, target.user_id),
            UserType::RoomOwner => (target.user_id, initiator.user_id),
        };

        NewMatch {
            seeker_id: seeker_id.to_string(),
            owner_id: owner_id.to_string(),
            listing_id,
            compatibility_score: self.scorer.persisted_score(initiator.profile, target.profile),
            status: MatchStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cleanliness, PetPreference, SleepSchedule, Smoking};

    fn create_profile(sleep: SleepSchedule, smoking: Smoking) -> LifestyleProfile {
        LifestyleProfile {
            sleep_schedule: Some(sleep),
            smoking: Some(smoking),
            cleanliness: Some(Cleanliness::VeryClean),
            pet_preference: Some(PetPreference::OkayWithPets),
            ..Default::default()
        }
    }

    fn create_candidate(id: i64, owner_profile: Option<LifestyleProfile>) -> ListingCandidate {
        ListingCandidate {
            listing_id: id,
            owner_id: format!("owner_{}", id),
            owner_profile,
        }
    }

    #[test]
    fn test_rank_listings_sorted_by_score() {
        let ranker = Ranker::default();
        let viewer = create_profile(SleepSchedule::NightOwl, Smoking::NonSmoker);

        let smoker = LifestyleProfile {
            sleep_schedule: Some(SleepSchedule::EarlyBird),
            smoking: Some(Smoking::RegularSmoker),
            ..Default::default()
        };

        let candidates = vec![
            create_candidate(1, Some(smoker)),
            create_candidate(2, Some(viewer.clone())),
            create_candidate(3, None),
        ];

        let result = ranker.rank_listings(Some(&viewer), candidates, None);

        assert_eq!(result.total_candidates, 3);
        let ids: Vec<i64> = result.listings.iter().map(|l| l.listing_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(result.listings[0].compatibility_score, 100);
        assert_eq!(result.listings[1].compatibility_score, FALLBACK_SCORE);
        // (0.3 * 0.15 + 0.2 * 0.20) / 0.35
        assert_eq!(result.listings[2].compatibility_score, 24);
        assert_eq!(result.listings[2].concerns, vec!["Sleep Schedule", "Smoking Habits"]);
    }

    #[test]
    fn test_missing_viewer_uses_fallback() {
        let ranker = Ranker::default();
        let candidates = vec![
            create_candidate(1, Some(create_profile(SleepSchedule::Flexible, Smoking::NonSmoker))),
            create_candidate(2, None),
        ];

        let result = ranker.rank_listings(None, candidates, None);

        assert!(result
            .listings
            .iter()
            .all(|l| l.compatibility_score == FALLBACK_SCORE && l.strengths.is_empty()));
        // Stable sort keeps input order on ties
        assert_eq!(result.listings[0].listing_id, 1);
    }

    #[test]
    fn test_respects_limit() {
        let ranker = Ranker::default();
        let viewer = create_profile(SleepSchedule::NightOwl, Smoking::NonSmoker);
        let candidates: Vec<ListingCandidate> = (0..20)
            .map(|i| create_candidate(i, Some(viewer.clone())))
            .collect();

        let result = ranker.rank_listings(Some(&viewer), candidates, Some(5));

        assert_eq!(result.listings.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_draft_match_assigns_roles() {
        let ranker = Ranker::default();
        let seeker = create_profile(SleepSchedule::NightOwl, Smoking::NonSmoker);
        let owner = create_profile(SleepSchedule::NightOwl, Smoking::NonSmoker);

        let from_seeker = ranker.draft_match(
            MatchParty { user_id: "alice", profile: &seeker },
            UserType::RoomSeeker,
            MatchParty { user_id: "bob", profile: &owner },
            Some(7),
        );
        assert_eq!(from_seeker.seeker_id, "alice");
        assert_eq!(from_seeker.owner_id, "bob");
        assert_eq!(from_seeker.compatibility_score, "100.00");
        assert_eq!(from_seeker.status, MatchStatus::Pending);

        let from_owner = ranker.draft_match(
            MatchParty { user_id: "bob", profile: &owner },
            UserType::RoomOwner,
            MatchParty { user_id: "alice", profile: &seeker },
            None,
        );
        assert_eq!(from_owner.seeker_id, "alice");
        assert_eq!(from_owner.owner_id, "bob");
        assert_eq!(from_owner.listing_id, None);
    }
}
