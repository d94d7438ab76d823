//! Match scoring: combines the nine capped compatibility factors into one
//! 0 – 100 score for a (candidate, job) pair.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; the default backend is
//! `MatchEngine` parameterized by a `FactorWeights` table.

use chrono::{NaiveDate, Utc};

use crate::matching::advice::career_advice;
use crate::matching::factors::{
    availability_score, career_progression_score, cultural_fit_score, education_score,
    experience_score, location_score, personality_score, required_years, salary_score,
    total_experience_years, FactorScore,
};
use crate::matching::gaps::analyze_gaps;
use crate::matching::skills::{match_skills, SkillMatchOutcome};
use crate::matching::weights::{Factor, FactorWeights};
use crate::models::job::JobPosting;
use crate::models::match_result::{CompatibilityFactors, MatchResult};
use crate::models::profile::CandidateProfile;

/// Scores one job against one candidate. Implementations must be pure and
/// safe to call from many threads at once.
pub trait MatchScorer: Send + Sync {
    fn score_one(&self, profile: &CandidateProfile, job: &JobPosting) -> MatchResult;

    /// Short label for logs and responses.
    fn backend(&self) -> &'static str;
}

/// Deterministic rule-based scorer.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    weights: FactorWeights,
    /// Reference date for open-ended work experience. `None` means today (UTC).
    as_of: Option<NaiveDate>,
}

impl MatchEngine {
    pub fn new(weights: FactorWeights) -> Self {
        Self {
            weights,
            as_of: None,
        }
    }

    pub fn with_reference_date(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    fn reference_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl MatchScorer for MatchEngine {
    fn score_one(&self, profile: &CandidateProfile, job: &JobPosting) -> MatchResult {
        let w = &self.weights;
        let mut reasons = Vec::new();
        let mut keep = |factor: FactorScore| -> u32 {
            if let Some(reason) = factor.reason {
                reasons.push(reason);
            }
            factor.points
        };

        let skill_outcome = match_skills(&profile.skills, &job.skills);
        let skills = keep(skills_factor(&skill_outcome, w.cap(Factor::Skills)));

        let years = total_experience_years(&profile.experience, self.reference_date());
        let experience = keep(experience_score(
            years,
            required_years(&job.title),
            w.cap(Factor::Experience),
        ));

        let location_result = location_score(profile, job, w.cap(Factor::Location));
        let location = keep(location_result.factor);

        let salary = keep(salary_score(
            profile.expected_salary,
            job.salary,
            w.cap(Factor::Salary),
        ));
        let education = keep(education_score(profile, w.cap(Factor::Education)));
        let availability = keep(availability_score(
            profile.availability,
            w.cap(Factor::Availability),
        ));
        let personality = keep(personality_score(profile, w.cap(Factor::Personality)));
        let career_progression = keep(career_progression_score(
            profile.current_title.as_deref(),
            &job.title,
            w.cap(Factor::CareerProgression),
        ));
        let cultural_fit = keep(cultural_fit_score(profile, w.cap(Factor::CulturalFit)));

        let compatibility_factors = CompatibilityFactors {
            skills,
            experience,
            location,
            salary,
            education,
            availability,
            personality,
            career_progression,
            cultural_fit,
        };
        let score = compatibility_factors.total().min(100);

        let skill_gaps = analyze_gaps(&skill_outcome, &job.title);
        let career_advice = career_advice(score, &skill_gaps, years);

        MatchResult {
            job_id: job.id.clone(),
            score,
            matched_skills: skill_outcome.matched,
            compatibility_factors,
            skill_gaps,
            distance_km: location_result.distance_km,
            career_advice,
            reasons,
        }
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

fn skills_factor(outcome: &SkillMatchOutcome, cap: u32) -> FactorScore {
    let points = outcome.factor_points(cap);
    let total = outcome.job_skills.len();
    let matched = outcome.matched.len();

    let reason = if total == 0 {
        None
    } else if matched == 0 {
        Some("No required skills matched".to_string())
    } else if points as f64 >= cap as f64 * 0.8 {
        Some(format!("Excellent skills alignment: {matched} skills matched"))
    } else if points as f64 >= cap as f64 * 0.5 {
        Some(format!("Good skills alignment: {matched} of {total} skills matched"))
    } else {
        Some(format!("Partial skills alignment: {matched} of {total} skills matched"))
    };
    FactorScore { points, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::quality::MatchQuality;
    use crate::matching::weights::{BASIC_WEIGHTS, ENHANCED_WEIGHTS};
    use crate::models::match_result::MatchType;
    use crate::models::profile::{Availability, Coordinates, EducationRecord, WorkExperience};

    fn engine() -> MatchEngine {
        MatchEngine::new(ENHANCED_WEIGHTS)
            .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_job(title: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: "job-42".to_string(),
            title: title.to_string(),
            skills: strings(skills),
            ..JobPosting::default()
        }
    }

    fn strong_profile() -> CandidateProfile {
        CandidateProfile {
            skills: strings(&["Rust", "Kubernetes", "PostgreSQL", "AWS"]),
            experience: vec![WorkExperience {
                company: "Acme".to_string(),
                position: "Backend Engineer".to_string(),
                start_date: Some("2016-01-01".to_string()),
                end_date: None,
                current: true,
            }],
            coordinates: Some(Coordinates::new(12.9716, 77.5946)),
            location: Some("Bangalore".to_string()),
            expected_salary: Some(100_000.0),
            availability: Availability::Available,
            education: vec![EducationRecord::default()],
            interests: strings(&["open source"]),
            current_title: Some("Backend Engineer".to_string()),
        }
    }

    #[test]
    fn test_strong_candidate_scores_excellent() {
        let mut job = make_job("Senior Backend Engineer", &["rust", "kubernetes", "postgresql", "aws"]);
        job.coordinates = Some(Coordinates::new(12.98, 77.60));
        job.salary = Some(105_000.0);

        let result = engine().score_one(&strong_profile(), &job);
        assert!(result.compatibility_factors.total() > 100);
        assert_eq!(result.score, 100);
        assert_eq!(result.match_quality(), MatchQuality::Excellent);
        assert!(result.skill_gaps.is_empty());
        assert!(result.distance_km.is_some());
        assert!(result
            .reasons
            .iter()
            .any(|r| r.starts_with("Perfect location match")));
    }

    #[test]
    fn test_empty_profile_scores_within_bounds() {
        let result = engine().score_one(&CandidateProfile::default(), &make_job("Engineer", &[]));
        assert!(result.score <= 100);
        assert_eq!(result.compatibility_factors.skills, 0);
        assert_eq!(result.compatibility_factors.salary, 0);
        assert_eq!(result.compatibility_factors.availability, 0);
        assert!(result.distance_km.is_none());
        assert_eq!(result.match_quality(), MatchQuality::from_score(result.score));
    }

    #[test]
    fn test_factors_never_exceed_caps() {
        let mut job = make_job("Lead Engineer", &["rust"]);
        job.salary = Some(100_000.0);
        let result = engine().score_one(&strong_profile(), &job);
        let f = result.compatibility_factors;
        let w = ENHANCED_WEIGHTS;
        assert!(f.skills <= w.skills);
        assert!(f.experience <= w.experience);
        assert!(f.location <= w.location);
        assert!(f.salary <= w.salary);
        assert!(f.education <= w.education);
        assert!(f.availability <= w.availability);
        assert!(f.personality <= w.personality);
        assert!(f.career_progression <= w.career_progression);
        assert!(f.cultural_fit <= w.cultural_fit);
        assert_eq!(result.score, f.total().min(100));
    }

    #[test]
    fn test_react_node_example() {
        let profile = CandidateProfile {
            skills: strings(&["React", "Node.js"]),
            ..CandidateProfile::default()
        };
        let result = engine().score_one(&profile, &make_job("Web Developer", &["react", "express", "docker"]));

        assert_eq!(result.matched_skills.len(), 1);
        assert_eq!(result.matched_skills[0].skill, "react");
        assert_eq!(result.matched_skills[0].match_type, MatchType::Exact);

        let gap_names: Vec<_> = result.skill_gaps.iter().map(|g| g.skill.as_str()).collect();
        assert_eq!(gap_names, vec!["express", "docker"]);
        assert!(result.skill_gaps.iter().all(|g| !g.learning_resources.is_empty()));
        // 25 / 3 ≈ 8.33 → 8
        assert_eq!(result.compatibility_factors.skills, 8);
    }

    #[test]
    fn test_availability_extremes() {
        let job = make_job("Engineer", &[]);
        let mut profile = CandidateProfile::default();

        profile.availability = Availability::NotAvailable;
        assert_eq!(engine().score_one(&profile, &job).compatibility_factors.availability, 0);

        profile.availability = Availability::Available;
        assert_eq!(
            engine().score_one(&profile, &job).compatibility_factors.availability,
            ENHANCED_WEIGHTS.availability
        );
    }

    #[test]
    fn test_senior_title_novice_candidate_uses_floor() {
        let result = engine().score_one(
            &CandidateProfile::default(),
            &make_job("Senior Backend Engineer", &["go"]),
        );
        let experience = result.compatibility_factors.experience;
        assert!(experience > 0);
        assert!(experience < ENHANCED_WEIGHTS.experience);
        assert!(result
            .reasons
            .iter()
            .any(|r| r.starts_with("Experience below requirement")));
    }

    #[test]
    fn test_basic_profile_zeroes_soft_factors() {
        let engine = MatchEngine::new(BASIC_WEIGHTS)
            .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let result = engine.score_one(&strong_profile(), &make_job("Senior Engineer", &["rust"]));
        assert_eq!(result.compatibility_factors.personality, 0);
        assert_eq!(result.compatibility_factors.career_progression, 0);
        assert_eq!(result.compatibility_factors.cultural_fit, 0);
        assert_eq!(result.compatibility_factors.skills, 35);
    }

    #[test]
    fn test_advice_mentions_high_gaps() {
        let result = engine().score_one(
            &CandidateProfile::default(),
            &make_job("Platform Engineer", &["kubernetes", "basket weaving"]),
        );
        assert!(result.career_advice.contains("Prioritize learning: kubernetes"));
        assert!(result.career_advice.contains("hands-on experience"));
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(engine().backend(), "rules");
    }
}
