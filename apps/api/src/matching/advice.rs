//! Template-based career guidance attached to each match.

use crate::models::match_result::{Importance, SkillGap};

/// One sentence for the score band, one naming high-importance gaps (if any),
/// one for the experience band. Joined with single spaces.
pub fn career_advice(score: u32, gaps: &[SkillGap], experience_years: f64) -> String {
    let mut sentences: Vec<String> = Vec::with_capacity(3);

    sentences.push(
        match score {
            s if s >= 80 => "This is an excellent match for your profile.",
            s if s >= 60 => "This is a good match, with minor gaps to close.",
            s if s >= 40 => "This role shows potential but needs development in a few areas.",
            _ => "Focus on skill development first before applying to roles like this.",
        }
        .to_string(),
    );

    let critical: Vec<&str> = gaps
        .iter()
        .filter(|g| g.importance == Importance::High)
        .map(|g| g.skill.as_str())
        .collect();
    if !critical.is_empty() {
        sentences.push(format!("Prioritize learning: {}.", critical.join(", ")));
    }

    if experience_years < 2.0 {
        sentences.push(
            "Gain more hands-on experience through projects, internships or open source."
                .to_string(),
        );
    } else if experience_years >= 5.0 {
        sentences.push("Your experience supports roles with broader ownership.".to_string());
    }

    sentences.join(" ")
}
