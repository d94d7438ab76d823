//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::geo::{distance_km, format_distance};
use crate::matching::quality::MatchQuality;
use crate::matching::ranker::{rank, RankOptions};
use crate::models::job::JobPosting;
use crate::models::match_result::MatchResult;
use crate::models::profile::{CandidateProfile, Coordinates};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub profile: CandidateProfile,
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub options: RankOptions,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ranking_id: Uuid,
    pub scorer_backend: String,
    pub total_jobs: usize,
    pub returned: usize,
    pub matches: Vec<MatchView>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub profile: CandidateProfile,
    pub job: JobPosting,
}

#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub from: Coordinates,
    pub to: Coordinates,
}

#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub distance_km: f64,
    pub label: String,
}

/// A match as returned to callers: the scored result plus the labels derived
/// from it.
#[derive(Debug, Serialize)]
pub struct MatchView {
    #[serde(flatten)]
    pub result: MatchResult,
    pub match_quality: MatchQuality,
    pub distance_label: Option<String>,
}

impl From<MatchResult> for MatchView {
    fn from(result: MatchResult) -> Self {
        Self {
            match_quality: result.match_quality(),
            distance_label: result.distance_km.map(format_distance),
            result,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn validate_coordinates(label: &str, coordinates: Option<Coordinates>) -> Result<(), AppError> {
    match coordinates {
        Some(c) if !c.is_valid() => Err(AppError::Validation(format!(
            "{label} coordinates out of range: ({}, {})",
            c.lat, c.lon
        ))),
        _ => Ok(()),
    }
}

fn validate_jobs(jobs: &[JobPosting]) -> Result<(), AppError> {
    for job in jobs {
        validate_coordinates(&format!("job '{}'", job.id), job.coordinates)?;
    }
    Ok(())
}

fn validate_options(options: &RankOptions) -> Result<(), AppError> {
    if let Some(max) = options.max_distance_km {
        if !max.is_finite() || max < 0.0 {
            return Err(AppError::Validation(
                "max_distance_km must be a non-negative number".to_string(),
            ));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches/rank
///
/// Scores every job against the profile, then filters, sorts and truncates
/// per `options`. Runs on the blocking pool under the configured deadline.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.jobs.is_empty() {
        return Err(AppError::Validation("jobs cannot be empty".to_string()));
    }
    let max_jobs = state.config.max_jobs_per_request;
    if request.jobs.len() > max_jobs {
        warn!(
            jobs = request.jobs.len(),
            max_jobs, "Rejected oversized rank request"
        );
        return Err(AppError::Validation(format!(
            "at most {max_jobs} jobs may be ranked per request (got {})",
            request.jobs.len()
        )));
    }
    validate_coordinates("profile", request.profile.coordinates)?;
    validate_jobs(&request.jobs)?;
    validate_options(&request.options)?;

    let ranking_id = Uuid::new_v4();
    let total_jobs = request.jobs.len();
    let scorer = state.scorer.clone();
    let scorer_backend = scorer.backend().to_string();

    // On timeout the blocking task still runs to completion; only the response is abandoned.
    let task = tokio::task::spawn_blocking(move || {
        rank(
            scorer.as_ref(),
            &request.profile,
            &request.jobs,
            &request.options,
        )
    });
    let results = tokio::time::timeout(state.config.rank_timeout, task)
        .await
        .map_err(|_| {
            AppError::Timeout(format!(
                "ranking {total_jobs} jobs exceeded {} ms",
                state.config.rank_timeout.as_millis()
            ))
        })?
        .map_err(|e| AppError::Internal(anyhow::anyhow!("ranking task failed: {e}")))?;

    info!(%ranking_id, total_jobs, returned = results.len(), "Ranking complete");

    Ok(Json(RankResponse {
        ranking_id,
        scorer_backend,
        total_jobs,
        returned: results.len(),
        matches: results.into_iter().map(MatchView::from).collect(),
    }))
}

/// POST /api/v1/matches/score
///
/// Scores a single (profile, job) pair.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchView>, AppError> {
    validate_coordinates("profile", request.profile.coordinates)?;
    validate_jobs(std::slice::from_ref(&request.job))?;

    let result = state.scorer.score_one(&request.profile, &request.job);
    Ok(Json(MatchView::from(result)))
}

/// POST /api/v1/geo/distance
pub async fn handle_distance(
    Json(request): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, AppError> {
    validate_coordinates("from", Some(request.from))?;
    validate_coordinates("to", Some(request.to))?;

    let km = distance_km(request.from, request.to);
    Ok(Json(DistanceResponse {
        distance_km: km,
        label: format_distance(km),
    }))
}
