//! Ranker: scores a job collection against one candidate, then filters,
//! sorts and truncates.
//!
//! The map step runs on the rayon pool; filter/sort/truncate is a single
//! sequential pass once every score is in.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::scoring::MatchScorer;
use crate::models::job::JobPosting;
use crate::models::match_result::MatchResult;
use crate::models::profile::CandidateProfile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    #[serde(default)]
    pub min_score: u32,
    /// Only applied when the candidate has coordinates.
    pub max_distance_km: Option<f64>,
    #[serde(default)]
    pub sort_by_distance: bool,
    pub limit: Option<usize>,
}

pub fn rank(
    scorer: &dyn MatchScorer,
    profile: &CandidateProfile,
    jobs: &[JobPosting],
    options: &RankOptions,
) -> Vec<MatchResult> {
    let scored: Vec<MatchResult> = jobs
        .par_iter()
        .map(|job| scorer.score_one(profile, job))
        .collect();
    let total = scored.len();

    let geo_aware = profile.coordinates.is_some();
    let mut results: Vec<MatchResult> = scored
        .into_iter()
        .filter(|r| r.score >= options.min_score)
        .filter(|r| match (geo_aware, options.max_distance_km, r.distance_km) {
            (true, Some(max), Some(d)) => d <= max,
            _ => true,
        })
        .collect();
    let kept = results.len();

    if options.sort_by_distance && geo_aware {
        results.sort_by(by_distance_then_score);
    } else {
        results.sort_by(|a, b| b.score.cmp(&a.score));
    }

    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    debug!(
        backend = scorer.backend(),
        scored = total,
        kept,
        returned = results.len(),
        "ranked jobs"
    );

    results
}

/// Ascending distance; results without a distance go last. Ties on either
/// side fall back to descending score.
fn by_distance_then_score(a: &MatchResult, b: &MatchResult) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(da), Some(db)) => da.total_cmp(&db).then_with(|| b.score.cmp(&a.score)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.score.cmp(&a.score),
    }
}
