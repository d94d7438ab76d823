pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matches/rank", post(handlers::handle_rank))
        .route("/api/v1/matches/score", post(handlers::handle_score))
        .route("/api/v1/geo/distance", post(handlers::handle_distance))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::matching::weights::ENHANCED_WEIGHTS;
    use crate::matching::MatchEngine;

    fn test_state(max_jobs_per_request: usize) -> AppState {
        AppState {
            config: Config {
                max_jobs_per_request,
                rank_timeout: Duration::from_secs(5),
                ..Config::default()
            },
            scorer: Arc::new(MatchEngine::new(ENHANCED_WEIGHTS)),
        }
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn job(id: &str, title: &str, skills: &[&str], lat: f64, lon: f64) -> Value {
        json!({
            "id": id,
            "title": title,
            "skills": skills,
            "coordinates": {"lat": lat, "lon": lon},
        })
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state(10));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rank_sorted_by_distance() {
        let body = json!({
            "profile": {
                "skills": ["Rust", "Docker"],
                "coordinates": {"lat": 12.9716, "lon": 77.5946},
                "availability": "available"
            },
            "jobs": [
                job("mumbai", "Rust Engineer", &["rust"], 19.0760, 72.8777),
                job("local", "Rust Engineer", &["rust"], 12.98, 77.60),
                {"id": "remote", "title": "Rust Engineer", "skills": ["rust"]}
            ],
            "options": {"sort_by_distance": true}
        });
        let (status, json) = post_json(build_router(test_state(10)), "/api/v1/matches/rank", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_jobs"], 3);
        assert_eq!(json["returned"], 3);
        let ids: Vec<&str> = json["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["job_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["local", "mumbai", "remote"]);
        assert!(json["matches"][2]["distance_km"].is_null());
        assert!(json["matches"][0]["match_quality"].is_string());
    }

    #[tokio::test]
    async fn test_rank_applies_min_score_and_limit() {
        let body = json!({
            "profile": {"skills": ["Rust"]},
            "jobs": [
                job("a", "Engineer", &["rust"], 0.0, 0.0),
                job("b", "Engineer", &["cobol"], 0.0, 0.0),
                job("c", "Engineer", &["rust", "go"], 0.0, 0.0)
            ],
            "options": {"min_score": 20, "limit": 1}
        });
        let (status, json) = post_json(build_router(test_state(10)), "/api/v1/matches/rank", body).await;
        assert_eq!(status, StatusCode::OK);
        let matches = json["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["job_id"], "a");
        assert!(matches[0]["score"].as_u64().unwrap() >= 20);
    }

    #[tokio::test]
    async fn test_rank_rejects_too_many_jobs() {
        let jobs: Vec<Value> = (0..3)
            .map(|i| json!({"id": i.to_string(), "title": "Engineer"}))
            .collect();
        let body = json!({"profile": {}, "jobs": jobs});
        let (status, json) = post_json(build_router(test_state(2)), "/api/v1/matches/rank", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rank_rejects_empty_jobs() {
        let body = json!({"profile": {}, "jobs": []});
        let (status, _) = post_json(build_router(test_state(10)), "/api/v1/matches/rank", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rank_rejects_invalid_coordinates() {
        let body = json!({
            "profile": {"coordinates": {"lat": 123.0, "lon": 0.0}},
            "jobs": [{"id": "a", "title": "Engineer"}]
        });
        let (status, json) = post_json(build_router(test_state(10)), "/api/v1/matches/rank", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"]["message"].as_str().unwrap().contains("profile"));
    }

    #[tokio::test]
    async fn test_score_single_pair() {
        let body = json!({
            "profile": {"skills": ["React", "Node.js"], "availability": "not_available"},
            "job": {"id": "web", "title": "Web Developer", "skills": ["react", "express", "docker"]}
        });
        let (status, json) = post_json(build_router(test_state(10)), "/api/v1/matches/score", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["job_id"], "web");
        assert_eq!(json["matched_skills"][0]["match_type"], "exact");
        assert_eq!(json["skill_gaps"].as_array().unwrap().len(), 2);
        assert_eq!(json["compatibility_factors"]["availability"], 0);
    }

    #[tokio::test]
    async fn test_distance_endpoint() {
        let body = json!({
            "from": {"lat": 12.9716, "lon": 77.5946},
            "to": {"lat": 19.0760, "lon": 72.8777}
        });
        let (status, json) = post_json(build_router(test_state(10)), "/api/v1/geo/distance", body).await;
        assert_eq!(status, StatusCode::OK);
        let km = json["distance_km"].as_f64().unwrap();
        assert!((840.0..=850.0).contains(&km));
        assert!(json["label"].as_str().unwrap().ends_with("km away"));
    }
}
