//! Skill gap analysis: importance tiering and learning resources for job
//! skills the candidate does not cover.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::matching::skills::{canonical_skill, SkillMatchOutcome};
use crate::models::match_result::{Importance, SkillGap};

/// Core languages, frameworks, cloud platforms and ML terms.
static HIGH_IMPORTANCE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "javascript",
        "typescript",
        "python",
        "java",
        "golang",
        "rust",
        "c++",
        "c#",
        "react",
        "angular",
        "vue",
        "node",
        "kubernetes",
        "aws",
        "gcp",
        "azure",
        "sql",
        "machine learning",
        "deep learning",
        "artificial intelligence",
        "tensorflow",
        "pytorch",
    ]
    .into_iter()
    .collect()
});

/// Tooling, CI/CD and testing frameworks.
static MEDIUM_IMPORTANCE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "docker",
        "git",
        "ci/cd",
        "jenkins",
        "github actions",
        "terraform",
        "ansible",
        "linux",
        "webpack",
        "express",
        "graphql",
        "rest",
        "agile",
        "jest",
        "mocha",
        "pytest",
        "junit",
        "selenium",
        "cypress",
    ]
    .into_iter()
    .collect()
});

/// Keyword → learning resources. Scanned in order, first key contained in the
/// skill wins, so longer keys that share a prefix must come first.
const LEARNING_RESOURCES: &[(&str, &[&str])] = &[
    // Languages
    ("javascript", &["MDN Web Docs: JavaScript Guide", "javascript.info", "freeCodeCamp JavaScript Algorithms and Data Structures"]),
    ("typescript", &["TypeScript Handbook", "Total TypeScript tutorials", "Execute Program: TypeScript"]),
    ("python", &["Official Python Tutorial", "Automate the Boring Stuff with Python", "Real Python"]),
    ("java", &["Dev.java Learn", "Java Programming MOOC (University of Helsinki)", "Baeldung"]),
    ("golang", &["A Tour of Go", "Go by Example", "Effective Go"]),
    ("rust", &["The Rust Programming Language", "Rust by Example", "Rustlings"]),
    ("c++", &["learncpp.com", "cppreference.com", "A Tour of C++"]),
    ("c#", &["Microsoft Learn: C#", ".NET tutorials on Microsoft Learn"]),
    // Frameworks
    ("react", &["react.dev Learn", "Epic React", "Full Stack Open"]),
    ("angular", &["angular.dev tutorials", "Angular University"]),
    ("vue", &["Vue.js Guide", "Vue Mastery"]),
    ("express", &["Express.js Guide", "MDN: Express/Node introduction", "The Odin Project: NodeJS"]),
    ("django", &["Django Girls Tutorial", "Official Django Tutorial"]),
    ("spring", &["Spring Guides", "Spring Academy"]),
    // Cloud and infrastructure
    ("docker", &["Docker Get Started", "Play with Docker", "Docker Deep Dive"]),
    ("kubernetes", &["Kubernetes Basics Tutorial", "Kubernetes the Hard Way", "CNCF Kubernetes Fundamentals"]),
    ("aws", &["AWS Skill Builder", "AWS Cloud Practitioner Essentials", "AWS Well-Architected Labs"]),
    ("gcp", &["Google Cloud Skills Boost", "Google Cloud Digital Leader path"]),
    ("azure", &["Microsoft Learn: Azure Fundamentals", "Azure Architecture Center"]),
    ("terraform", &["HashiCorp Terraform Tutorials", "Terraform: Up & Running"]),
    ("ci/cd", &["GitHub Actions Documentation", "GitLab CI/CD Tutorials", "Continuous Delivery (Humble & Farley)"]),
    ("git", &["Pro Git Book", "Learn Git Branching"]),
    // Data and ML
    ("mongodb", &["MongoDB University", "MongoDB Manual"]),
    ("sql", &["SQLBolt", "Mode SQL Tutorial", "PostgreSQL Tutorial"]),
    ("machine learning", &["Machine Learning Specialization (Coursera)", "fast.ai Practical Deep Learning", "Hands-On Machine Learning"]),
    ("deep learning", &["Deep Learning Specialization (Coursera)", "fast.ai Practical Deep Learning", "Dive into Deep Learning"]),
    ("tensorflow", &["TensorFlow Tutorials", "TensorFlow Developer Certificate path"]),
    ("pytorch", &["PyTorch Tutorials", "Learn PyTorch for Deep Learning"]),
    ("data", &["Kaggle Learn", "DataCamp", "Python for Data Analysis"]),
    // Methodologies
    ("agile", &["Scrum Guide", "Atlassian Agile Coach"]),
    ("graphql", &["How to GraphQL", "GraphQL Official Learn"]),
    ("rest", &["RESTful API Design (Microsoft Learn)", "MDN: HTTP Overview"]),
    // Testing
    ("jest", &["Jest Getting Started", "Testing JavaScript"]),
    ("pytest", &["pytest Documentation", "Python Testing with pytest"]),
    ("selenium", &["Selenium Documentation", "Test Automation University"]),
    ("cypress", &["Cypress Real World App", "Test Automation University"]),
    ("test", &["Test Automation University", "Ministry of Testing"]),
];

const FALLBACK_RESOURCES: &[&str] = &[
    "Coursera",
    "Udemy",
    "edX",
    "freeCodeCamp",
    "Official documentation",
];

/// Builds a gap entry for every unmatched job skill.
pub fn analyze_gaps(outcome: &SkillMatchOutcome, job_title: &str) -> Vec<SkillGap> {
    let title = job_title.to_lowercase();
    outcome
        .unmatched
        .iter()
        .map(|skill| {
            let position = outcome.job_skills.iter().position(|s| s == skill);
            SkillGap {
                skill: skill.clone(),
                importance: importance_for(skill, &title, position),
                current_level: 0,
                required_level: 1,
                learning_resources: learning_resources_for(skill),
            }
        })
        .collect()
}

/// `title` must be lower-cased. `position` is the skill's index in the job's
/// declared list.
pub fn importance_for(skill: &str, title: &str, position: Option<usize>) -> Importance {
    if title.contains(skill) {
        return Importance::High;
    }
    if in_tier(skill, &HIGH_IMPORTANCE) {
        return Importance::High;
    }
    if in_tier(skill, &MEDIUM_IMPORTANCE) {
        return Importance::Medium;
    }
    match position {
        Some(0..=2) => Importance::High,
        Some(3..=5) => Importance::Medium,
        _ => Importance::Low,
    }
}

/// A skill belongs to a tier when its canonical form is listed, or when one
/// of its words is (so "aws lambda" counts as "aws").
fn in_tier(skill: &str, tier: &HashSet<&'static str>) -> bool {
    let key = canonical_skill(skill).unwrap_or(skill);
    if tier.contains(key) {
        return true;
    }
    skill
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .any(|w| tier.contains(canonical_skill(w).unwrap_or(w)))
}

pub fn learning_resources_for(skill: &str) -> Vec<String> {
    let key = canonical_skill(skill).unwrap_or(skill);
    let resources = LEARNING_RESOURCES
        .iter()
        .find(|(keyword, _)| key.contains(keyword))
        .map(|(_, resources)| *resources)
        .unwrap_or(FALLBACK_RESOURCES);
    resources.iter().map(|r| r.to_string()).collect()
}
