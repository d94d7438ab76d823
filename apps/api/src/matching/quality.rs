use serde::{Deserialize, Serialize};

/// Discrete label derived from a match score. `from_score` is the only place
/// the bands are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchQuality {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => MatchQuality::Excellent,
            s if s >= 60 => MatchQuality::Good,
            s if s >= 40 => MatchQuality::Fair,
            _ => MatchQuality::Poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (0, MatchQuality::Poor),
            (39, MatchQuality::Poor),
            (40, MatchQuality::Fair),
            (59, MatchQuality::Fair),
            (60, MatchQuality::Good),
            (79, MatchQuality::Good),
            (80, MatchQuality::Excellent),
            (100, MatchQuality::Excellent),
        ];
        for (score, expected) in cases {
            assert_eq!(MatchQuality::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchQuality::Excellent).unwrap(),
            r#""excellent""#
        );
    }
}
