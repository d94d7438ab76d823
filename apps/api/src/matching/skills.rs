//! Skill matching: resolves each job skill against the candidate's skills.
//!
//! Resolution order per job skill (first hit wins):
//! 1. exact (case-insensitive equality)  → similarity 1.0
//! 2. partial (either string contains the other) → 0.7
//! 3. semantic (same synonym group)      → 0.6
//!
//! Anything left over is returned as unmatched and becomes a skill gap.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::models::match_result::{MatchType, MatchedSkill};

/// Canonical skill → synonyms. Every term appears in at most one group.
const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript", "node.js", "nodejs"]),
    ("typescript", &["ts"]),
    ("python", &["py", "python3"]),
    ("golang", &["go"]),
    ("c++", &["cpp"]),
    ("c#", &["csharp", "dotnet", ".net"]),
    ("react", &["reactjs", "react.js"]),
    ("vue", &["vuejs", "vue.js"]),
    ("angular", &["angularjs", "angular.js"]),
    ("express", &["expressjs", "express.js"]),
    ("html", &["html5"]),
    ("css", &["css3"]),
    ("postgresql", &["postgres", "psql"]),
    ("mongodb", &["mongo"]),
    ("kubernetes", &["k8s"]),
    ("docker", &["containers", "containerization"]),
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud", "google cloud platform"]),
    ("azure", &["microsoft azure"]),
    ("ci/cd", &["cicd", "continuous integration", "continuous delivery"]),
    ("machine learning", &["ml"]),
    ("deep learning", &["dl", "neural networks"]),
    ("artificial intelligence", &["ai"]),
    ("natural language processing", &["nlp"]),
    ("tensorflow", &["tf"]),
    ("pytorch", &["torch"]),
    ("rest", &["restful", "rest api", "restful api"]),
    ("graphql", &["gql"]),
    ("agile", &["scrum", "kanban"]),
];

/// Every term (canonical or synonym) → its canonical key.
static CANONICAL_BY_TERM: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (canonical, synonyms) in SKILL_SYNONYMS {
        map.entry(*canonical).or_insert(*canonical);
        for synonym in *synonyms {
            map.entry(*synonym).or_insert(*canonical);
        }
    }
    map
});

/// Returns the canonical key of the synonym group containing `skill`, if any.
/// `skill` must already be lower-cased and trimmed.
pub fn canonical_skill(skill: &str) -> Option<&'static str> {
    CANONICAL_BY_TERM.get(skill).copied()
}

/// Lower-cases, trims, drops blanks and de-duplicates, keeping first-seen order.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct SkillMatchOutcome {
    /// Normalized job skills, in the job's declared order.
    pub job_skills: Vec<String>,
    pub matched: Vec<MatchedSkill>,
    /// Job skills with no match, in declared order.
    pub unmatched: Vec<String>,
}

impl SkillMatchOutcome {
    /// Skills factor: Σ (cap / total_job_skills) × similarity, rounded.
    /// Zero when the job lists no skills.
    pub fn factor_points(&self, cap: u32) -> u32 {
        if self.job_skills.is_empty() {
            return 0;
        }
        let per_skill = cap as f64 / self.job_skills.len() as f64;
        let points: f64 = self.matched.iter().map(|m| per_skill * m.similarity).sum();
        (points.round() as u32).min(cap)
    }
}

pub fn match_skills(candidate_skills: &[String], job_skills: &[String]) -> SkillMatchOutcome {
    let candidate = normalize_skills(candidate_skills);
    let job_skills = normalize_skills(job_skills);

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for job_skill in &job_skills {
        match best_match(&candidate, job_skill) {
            Some((candidate_skill, match_type)) => matched.push(MatchedSkill {
                skill: job_skill.clone(),
                candidate_skill: candidate_skill.to_string(),
                match_type,
                similarity: match_type.similarity(),
            }),
            None => unmatched.push(job_skill.clone()),
        }
    }

    SkillMatchOutcome {
        job_skills,
        matched,
        unmatched,
    }
}

fn best_match<'a>(candidate: &'a [String], job_skill: &str) -> Option<(&'a str, MatchType)> {
    if let Some(exact) = candidate.iter().find(|c| c.as_str() == job_skill) {
        return Some((exact.as_str(), MatchType::Exact));
    }

    if let Some(partial) = candidate
        .iter()
        .find(|c| c.contains(job_skill) || job_skill.contains(c.as_str()))
    {
        return Some((partial.as_str(), MatchType::Partial));
    }

    let group = canonical_skill(job_skill)?;
    candidate
        .iter()
        .find(|c| canonical_skill(c.as_str()) == Some(group))
        .map(|c| (c.as_str(), MatchType::Semantic))
}
