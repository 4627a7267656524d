use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ErrorResponse, FindMatchesRequest, HealthResponse, MatchesResponse, RecommendationsQuery, SearchFilters,
    SearchQuery,
};
use crate::services::{MatchError, MatchingService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MatchingService,
    pub limits: MatchLimits,
}

/// Limits applied to the explicit-criteria endpoint
#[derive(Debug, Clone, Copy)]
pub struct MatchLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            default_limit: crate::core::DEFAULT_MATCH_LIMIT,
            max_limit: 50,
        }
    }
}

impl MatchLimits {
    /// Effective limit for a request
    ///
    /// Fractions are truncated. Values below one (or not finite) fall back to
    /// the default, and anything above the maximum saturates to it.
    pub fn resolve(&self, requested: Option<f64>) -> usize {
        requested
            .filter(|n| n.is_finite() && *n >= 1.0)
            .map(|n| n as usize)
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

/// Configure all mentor-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/mentors/match/recommendations", web::get().to(recommendations))
        .route("/mentors/match", web::post().to(find_matches))
        .route("/mentors/search", web::get().to(search));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.service.directory().health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Profile-derived recommendations
///
/// GET /api/mentors/match/recommendations?userId={userId}
async fn recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    match state.service.recommendations(&query.user_id).await {
        Ok(matches) => {
            tracing::info!("Returning {} recommendations for user {}", matches.len(), query.user_id);
            HttpResponse::Ok().json(MatchesResponse { matches })
        }
        Err(e) => match_error_response(e, "Failed to get recommendations"),
    }
}

/// Find matching mentors against explicit criteria
///
/// POST /api/mentors/match
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "criteria": {
///     "skills": ["string"],
///     "interests": ["string"],
///     "location": "string",
///     "minExperience": 3,
///     "availability": "available|busy|unavailable",
///     "acceptsRemote": true
///   },
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    let limit = state.limits.resolve(req.limit);

    tracing::info!("Finding mentor matches for user: {}, limit: {}", req.user_id, limit);

    match state
        .service
        .find_matches(&req.user_id, req.criteria.as_ref(), limit)
        .await
    {
        Ok(matches) => {
            tracing::info!("Returning {} matches for user {}", matches.len(), req.user_id);
            HttpResponse::Ok().json(MatchesResponse { matches })
        }
        Err(e) => match_error_response(e, "Failed to find matching mentors"),
    }
}

/// Unscored mentor search
///
/// GET /api/mentors/search?q={query}&availability={availability}&acceptsRemote={bool}
async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let filters = SearchFilters {
        availability: query.availability,
        accepts_remote: query.accepts_remote,
    };

    match state.service.search(&query.q, Some(&filters)).await {
        Ok(matches) => {
            tracing::debug!("Search '{}' returned {} mentors", query.q, matches.len());
            HttpResponse::Ok().json(MatchesResponse { matches })
        }
        Err(e) => match_error_response(e, "Failed to search mentors"),
    }
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn match_error_response(err: MatchError, context: &str) -> HttpResponse {
    match err {
        MatchError::NotFound(user_id) => {
            tracing::warn!("{}: unknown user {}", context, user_id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "User not found".to_string(),
                message: format!("No user with id {}", user_id),
                status_code: 404,
            })
        }
        MatchError::Directory(e) => {
            tracing::error!("{}: {}", context, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: context.to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
