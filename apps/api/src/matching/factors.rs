//! Per-factor scoring rules. Every banded rule is a fraction of the factor's
//! cap so the same code serves any weight table.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::matching::geo::{distance_km, format_distance};
use crate::models::job::JobPosting;
use crate::models::profile::{Availability, CandidateProfile, WorkExperience};

/// Points awarded for one factor, with an optional human-readable reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub points: u32,
    pub reason: Option<String>,
}

impl FactorScore {
    fn new(points: u32, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: Some(reason.into()),
        }
    }

    fn silent(points: u32) -> Self {
        Self {
            points,
            reason: None,
        }
    }
}

fn fraction_of(cap: u32, fraction: f64) -> u32 {
    ((cap as f64 * fraction).round() as u32).min(cap)
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

const SENIOR_TITLE_WORDS: &[&str] = &["senior", "lead", "principal"];
const MID_TITLE_WORDS: &[&str] = &["mid", "intermediate"];
const JUNIOR_TITLE_WORDS: &[&str] = &["junior", "entry"];

/// Years of experience a job title implies.
pub fn required_years(job_title: &str) -> f64 {
    let title = job_title.to_lowercase();
    let has_any = |words: &[&str]| words.iter().any(|w| title.contains(w));
    if has_any(SENIOR_TITLE_WORDS) {
        5.0
    } else if has_any(MID_TITLE_WORDS) {
        3.0
    } else if has_any(JUNIOR_TITLE_WORDS) {
        0.0
    } else {
        2.0
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339, `YYYY-MM` and `YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d").ok()
}

/// Whole calendar months from `start` to `end`, never negative.
fn whole_months(start: NaiveDate, end: NaiveDate) -> i64 {
    let months = (end.year() as i64 - start.year() as i64) * 12 + end.month() as i64
        - start.month() as i64;
    months.max(0)
}

fn entry_months(entry: &WorkExperience, as_of: NaiveDate) -> i64 {
    let Some(start) = entry.start_date.as_deref().and_then(parse_date) else {
        return 0;
    };
    let end = if entry.current {
        Some(as_of)
    } else {
        match entry.end_date.as_deref() {
            Some(raw) => parse_date(raw),
            None => Some(as_of),
        }
    };
    end.map(|end| whole_months(start, end)).unwrap_or(0)
}

/// Total years across all entries, one decimal place.
pub fn total_experience_years(entries: &[WorkExperience], as_of: NaiveDate) -> f64 {
    let months: i64 = entries.iter().map(|e| entry_months(e, as_of)).sum();
    (months as f64 / 12.0 * 10.0).round() / 10.0
}

pub fn experience_score(actual: f64, required: f64, cap: u32) -> FactorScore {
    let cap_f = cap as f64;
    let points = if actual >= required {
        (actual / (required + 2.0) * cap_f).min(cap_f)
    } else {
        // Below requirement: never zeroed out, a quarter of the cap at least.
        (actual * cap_f / 5.0).max(cap_f / 4.0).min(cap_f)
    };
    let points = points.round() as u32;

    let reason = if actual < required {
        format!("Experience below requirement: {actual:.1} years ({required}+ expected)")
    } else if points as f64 >= cap_f * 0.8 {
        format!("Strong experience: {actual:.1} years ({required}+ expected)")
    } else {
        format!("Relevant experience: {actual:.1} years")
    };
    FactorScore::new(points, reason)
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

const LOCATION_FLOOR: f64 = 2.0 / 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationScore {
    pub factor: FactorScore,
    pub distance_km: Option<f64>,
}

pub fn location_score(profile: &CandidateProfile, job: &JobPosting, cap: u32) -> LocationScore {
    if let (Some(from), Some(to)) = (profile.coordinates, job.coordinates) {
        let km = distance_km(from, to);
        return LocationScore {
            factor: distance_band(km, cap),
            distance_km: Some(km),
        };
    }
    LocationScore {
        factor: location_text_band(profile.location.as_deref(), job.location.as_deref(), cap),
        distance_km: None,
    }
}

fn distance_band(km: f64, cap: u32) -> FactorScore {
    let label = format_distance(km);
    if km <= 10.0 {
        FactorScore::new(cap, format!("Perfect location match ({label})"))
    } else if km <= 25.0 {
        FactorScore::new(fraction_of(cap, 0.8), format!("Nearby location ({label})"))
    } else if km <= 50.0 {
        FactorScore::new(
            fraction_of(cap, 10.0 / 15.0),
            format!("Within commuting distance ({label})"),
        )
    } else if km <= 100.0 {
        FactorScore::new(
            fraction_of(cap, 7.0 / 15.0),
            format!("Same region ({label})"),
        )
    } else {
        FactorScore::new(
            fraction_of(cap, LOCATION_FLOOR),
            format!("Distant location ({label})"),
        )
    }
}

/// Free-text fallback when either side lacks coordinates.
fn location_text_band(candidate: Option<&str>, job: Option<&str>, cap: u32) -> FactorScore {
    let floor = FactorScore::silent(fraction_of(cap, LOCATION_FLOOR));
    let (Some(candidate), Some(job)) = (candidate, job) else {
        return floor;
    };
    let candidate = candidate.trim().to_lowercase();
    let job = job.trim().to_lowercase();
    if candidate.is_empty() || job.is_empty() {
        return floor;
    }

    if candidate == job {
        return FactorScore::new(fraction_of(cap, 0.8), format!("Same location: {job}"));
    }
    if candidate.contains(&job) || job.contains(&candidate) {
        return FactorScore::new(
            fraction_of(cap, 2.0 / 3.0),
            format!("Overlapping location: {job}"),
        );
    }

    let segments = |s: &str| -> Vec<String> {
        s.split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    };
    let candidate_segments = segments(&candidate);
    if let Some(shared) = segments(&job)
        .into_iter()
        .find(|p| candidate_segments.contains(p))
    {
        return FactorScore::new(fraction_of(cap, 0.5), format!("Same area: {shared}"));
    }

    floor
}

// ────────────────────────────────────────────────────────────────────────────
// Salary
// ────────────────────────────────────────────────────────────────────────────

pub fn salary_score(expected: Option<f64>, offered: Option<f64>, cap: u32) -> FactorScore {
    let (Some(expected), Some(offered)) = (expected, offered) else {
        return FactorScore::silent(0);
    };
    if !expected.is_finite() || !offered.is_finite() || offered <= 0.0 {
        return FactorScore::silent(0);
    }

    let diff = (expected - offered).abs() / offered;
    let (fraction, reason) = if diff <= 0.10 {
        (1.0, "Salary expectations well aligned")
    } else if diff <= 0.20 {
        (0.8, "Salary expectations closely aligned")
    } else if diff <= 0.30 {
        (0.6, "Salary expectations partially aligned")
    } else if diff <= 0.50 {
        (0.4, "Salary expectations somewhat apart")
    } else {
        (0.2, "Salary expectations differ significantly")
    };
    FactorScore::new(fraction_of(cap, fraction), reason)
}

// ────────────────────────────────────────────────────────────────────────────
// Flat and placeholder factors
// ────────────────────────────────────────────────────────────────────────────

pub fn education_score(profile: &CandidateProfile, cap: u32) -> FactorScore {
    if profile.education.is_empty() {
        FactorScore::silent(0)
    } else {
        FactorScore::new(cap, "Education background on record")
    }
}

pub fn availability_score(availability: Availability, cap: u32) -> FactorScore {
    match availability {
        Availability::Available => FactorScore::new(cap, "Available immediately"),
        Availability::OpenToOffers => {
            FactorScore::new(fraction_of(cap, 0.6), "Open to new opportunities")
        }
        Availability::NotAvailable => FactorScore::silent(0),
    }
}

/// Presence-of-interests heuristic; carries no real personality signal.
pub fn personality_score(profile: &CandidateProfile, cap: u32) -> FactorScore {
    if profile.interests.is_empty() {
        FactorScore::silent(0)
    } else {
        FactorScore::silent(fraction_of(cap, 0.7))
    }
}

/// Same heuristic as personality, at a different share of its cap.
pub fn cultural_fit_score(profile: &CandidateProfile, cap: u32) -> FactorScore {
    if profile.interests.is_empty() {
        FactorScore::silent(0)
    } else {
        FactorScore::new(
            fraction_of(cap, 0.8),
            format!("Shared interests: {}", profile.interests.join(", ")),
        )
    }
}

const SENIORITY_STEPS: &[&str] = &["senior", "lead", "manager"];

pub fn career_progression_score(
    current_title: Option<&str>,
    job_title: &str,
    cap: u32,
) -> FactorScore {
    let job_title = job_title.to_lowercase();
    let current = current_title.unwrap_or_default().to_lowercase();
    match SENIORITY_STEPS
        .iter()
        .find(|kw| job_title.contains(*kw) && !current.contains(*kw))
    {
        Some(step) => FactorScore::new(cap, format!("Career growth opportunity: {step} role")),
        None => FactorScore::silent(fraction_of(cap, 0.4)),
    }
}
