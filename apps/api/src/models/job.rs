use serde::{Deserialize, Serialize};

use crate::models::profile::Coordinates;

/// A job posting as supplied by the posting store or an external source adapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub coordinates: Option<Coordinates>,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub category: Option<String>,
}
