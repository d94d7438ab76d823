//! Factor caps. Both the six-factor and the nine-factor scoring policies are
//! rows in this table, not separate engines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Skills,
    Experience,
    Location,
    Salary,
    Education,
    Availability,
    Personality,
    CareerProgression,
    CulturalFit,
}

impl Factor {
    pub const ALL: [Factor; 9] = [
        Factor::Skills,
        Factor::Experience,
        Factor::Location,
        Factor::Salary,
        Factor::Education,
        Factor::Availability,
        Factor::Personality,
        Factor::CareerProgression,
        Factor::CulturalFit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Factor::Skills => "skills",
            Factor::Experience => "experience",
            Factor::Location => "location",
            Factor::Salary => "salary",
            Factor::Education => "education",
            Factor::Availability => "availability",
            Factor::Personality => "personality",
            Factor::CareerProgression => "career_progression",
            Factor::CulturalFit => "cultural_fit",
        }
    }
}

/// Maximum points each factor may contribute to the 0 – 100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorWeights {
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

/// Nine-factor policy. Caps sum past 100; the engine clamps the total.
pub const ENHANCED_WEIGHTS: FactorWeights = FactorWeights {
    skills: 25,
    experience: 20,
    location: 15,
    salary: 10,
    education: 10,
    availability: 5,
    personality: 10,
    career_progression: 5,
    cultural_fit: 5,
};

/// Six-factor policy: the soft factors are switched off.
pub const BASIC_WEIGHTS: FactorWeights = FactorWeights {
    skills: 35,
    experience: 25,
    location: 20,
    salary: 10,
    education: 5,
    availability: 5,
    personality: 0,
    career_progression: 0,
    cultural_fit: 0,
};

impl FactorWeights {
    pub fn cap(&self, factor: Factor) -> u32 {
        match factor {
            Factor::Skills => self.skills,
            Factor::Experience => self.experience,
            Factor::Location => self.location,
            Factor::Salary => self.salary,
            Factor::Education => self.education,
            Factor::Availability => self.availability,
            Factor::Personality => self.personality,
            Factor::CareerProgression => self.career_progression,
            Factor::CulturalFit => self.cultural_fit,
        }
    }

    pub fn sum(&self) -> u32 {
        Factor::ALL.iter().map(|f| self.cap(*f)).sum()
    }

    /// Number of factors with a non-zero cap.
    pub fn active_factors(&self) -> usize {
        Factor::ALL.iter().filter(|f| self.cap(**f) > 0).count()
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        ENHANCED_WEIGHTS
    }
}

/// Named weight policy, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightProfile {
    Basic,
    #[default]
    Enhanced,
}

impl WeightProfile {
    pub fn weights(self) -> FactorWeights {
        match self {
            WeightProfile::Basic => BASIC_WEIGHTS,
            WeightProfile::Enhanced => ENHANCED_WEIGHTS,
        }
    }
}

impl FromStr for WeightProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(WeightProfile::Basic),
            "enhanced" => Ok(WeightProfile::Enhanced),
            other => Err(format!(
                "unknown weight profile '{other}' (expected 'basic' or 'enhanced')"
            )),
        }
    }
}

impl fmt::Display for WeightProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightProfile::Basic => write!(f, "basic"),
            WeightProfile::Enhanced => write!(f, "enhanced"),
        }
    }
}
