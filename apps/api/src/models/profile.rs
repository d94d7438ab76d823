use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude within [-90, 90], longitude within [-180, 180], both finite.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    OpenToOffers,
    #[default]
    NotAvailable,
}

/// One position on the candidate's work history.
///
/// Dates stay as the free-text values the profile store hands us; unparsable
/// dates count as a zero-length position rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    pub field: Option<String>,
    pub graduation_year: Option<i32>,
}

/// Read-only view of a candidate for one ranking call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    pub coordinates: Option<Coordinates>,
    pub location: Option<String>,
    pub expected_salary: Option<f64>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub current_title: Option<String>,
}
