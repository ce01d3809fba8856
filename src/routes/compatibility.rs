use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::RankingSettings;
use crate::core::{MatchParty, Ranker};
use crate::models::{
    ErrorResponse, HealthResponse, ListingCandidate, RankListingsRequest, RankListingsResponse,
    ScoreMatchRequest, ScoreRequest, ScoreResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub ranking: RankingSettings,
}

/// Configure all compatibility-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_profiles))
        .route("/listings/rank", web::post().to(rank_listings))
        .route("/matches/score", web::post().to(score_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score two profiles against each other
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "profileA": { "sleepSchedule": "night_owl", "smoking": "non_smoker" },
///   "profileB": { "sleepSchedule": "flexible" }
/// }
/// ```
async fn score_profiles(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let result = state.ranker.scorer().score(&req.profile_a, &req.profile_b);

    tracing::debug!(
        "Scored profile pair: {} {} ({} strengths, {} concerns)",
        result.score,
        result.tier(),
        result.strengths.len(),
        result.concerns.len()
    );

    HttpResponse::Ok().json(ScoreResponse::from(result))
}

/// Rank listings for a viewer by owner compatibility
///
/// POST /api/v1/listings/rank
///
/// Request body:
/// ```json
/// {
///   "viewerProfile": { "sleepSchedule": "early_bird" },
///   "listings": [{ "listingId": 1, "ownerId": "string", "ownerProfile": {} }],
///   "limit": 20
/// }
/// ```
async fn rank_listings(
    state: web::Data<AppState>,
    req: web::Json<RankListingsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for rank_listings request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    if req.listings.len() > state.ranking.max_candidates {
        tracing::warn!(
            "Rejected ranking request with {} listings (max {})",
            req.listings.len(),
            state.ranking.max_candidates
        );
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Too many listings",
            format!("At most {} listings can be ranked per request", state.ranking.max_candidates),
        ));
    }

    let limit = state.ranking.effective_limit(req.limit);
    let req = req.into_inner();
    let candidates: Vec<ListingCandidate> = req.listings.into_iter().map(Into::into).collect();

    let result = state
        .ranker
        .rank_listings(req.viewer_profile.as_ref(), candidates, Some(limit));

    tracing::info!(
        "Returning {} ranked listings (from {} candidates)",
        result.listings.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(RankListingsResponse {
        listings: result.listings,
        total_results: result.total_candidates,
    })
}

/// Score a prospective match and return the record to persist
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "userType": "room_seeker|room_owner",
///   "profile": {},
///   "targetUserId": "string",
///   "targetProfile": {},
///   "listingId": 1
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for score_match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    let new_match = state.ranker.draft_match(
        MatchParty {
            user_id: &req.user_id,
            profile: &req.profile,
        },
        req.user_type,
        MatchParty {
            user_id: &req.target_user_id,
            profile: &req.target_profile,
        },
        req.listing_id,
    );

    tracing::info!(
        "Scored match {} -> {}: {}",
        req.user_id,
        req.target_user_id,
        new_match.compatibility_score
    );

    HttpResponse::Ok().json(new_match)
}
