use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::matching::weights::WeightProfile;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub weight_profile: WeightProfile,
    /// Upper bound on `jobs` in a single rank request.
    pub max_jobs_per_request: usize,
    /// Deadline around one whole rank call.
    pub rank_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let weight_profile = std::env::var("MATCH_WEIGHT_PROFILE")
            .unwrap_or_else(|_| "enhanced".to_string())
            .parse::<WeightProfile>()
            .map_err(|e| anyhow!(e))
            .context("MATCH_WEIGHT_PROFILE must be 'basic' or 'enhanced'")?;

        let max_jobs_per_request: usize = env_or("MAX_JOBS_PER_REQUEST", 5000)?;
        if max_jobs_per_request == 0 {
            return Err(anyhow!("MAX_JOBS_PER_REQUEST must be greater than zero"));
        }

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            weight_profile,
            max_jobs_per_request,
            rank_timeout: Duration::from_millis(env_or("RANK_TIMEOUT_MS", 2000)?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            weight_profile: WeightProfile::default(),
            max_jobs_per_request: 5000,
            rank_timeout: Duration::from_millis(2000),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
