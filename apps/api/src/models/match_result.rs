use serde::{Deserialize, Serialize};

use crate::matching::quality::MatchQuality;

/// How a job skill was resolved against the candidate's skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Partial,
    Semantic,
}

impl MatchType {
    pub fn similarity(self) -> f64 {
        match self {
            MatchType::Exact => 1.0,
            MatchType::Partial => 0.7,
            MatchType::Semantic => 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSkill {
    /// The job skill, normalized.
    pub skill: String,
    /// The candidate skill that satisfied it.
    pub candidate_skill: String,
    pub match_type: MatchType,
    pub similarity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub importance: Importance,
    pub current_level: u8,
    pub required_level: u8,
    pub learning_resources: Vec<String>,
}

/// Per-factor contributions. Each value is bounded by the factor's cap in the
/// active weight table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityFactors {
    pub skills: u32,
    pub experience: u32,
    pub location: u32,
    pub salary: u32,
    pub education: u32,
    pub availability: u32,
    pub personality: u32,
    pub career_progression: u32,
    pub cultural_fit: u32,
}

impl CompatibilityFactors {
    pub fn total(&self) -> u32 {
        self.skills
            + self.experience
            + self.location
            + self.salary
            + self.education
            + self.availability
            + self.personality
            + self.career_progression
            + self.cultural_fit
    }
}

/// Outcome of scoring one job against one candidate.
///
/// Match quality is derived from `score` on demand and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    /// 0 – 100
    pub score: u32,
    pub matched_skills: Vec<MatchedSkill>,
    pub compatibility_factors: CompatibilityFactors,
    pub skill_gaps: Vec<SkillGap>,
    pub distance_km: Option<f64>,
    pub career_advice: String,
    pub reasons: Vec<String>,
}

impl MatchResult {
    pub fn match_quality(&self) -> MatchQuality {
        MatchQuality::from_score(self.score)
    }
}
