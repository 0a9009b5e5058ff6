use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        ingest::ingest_upload,
        reviews::{create_review, delete_review, get_review, list_reviews, update_review},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Review routes
        .route("/reviews", get(list_reviews).post(create_review))
        .route(
            "/reviews/{id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        // Upload notifications
        .route("/ingest", post(ingest_upload))
        // Probes
        .route("/livez", get(livez))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::objects::MemoryObjectStore;
    use crate::storage::InMemoryRepository;

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        let request = builder
            .body(
                body.map(|b| Body::from(b.to_string()))
                    .unwrap_or_else(Body::empty),
            )
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn send_json(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());
        let (status, _) = send(&app, "GET", "/livez", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_reviews_empty() {
        let app = create_app(AppState::default());
        let (status, json) = send_json(&app, "GET", "/reviews", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get_review() {
        let app = create_app(AppState::default());

        let (status, created) = send_json(
            &app,
            "POST",
            "/reviews",
            Some(r#"{"seId":"s1","tyId":"t1"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["seId"], "s1");
        assert_eq!(created["tyId"], "t1");

        let review_id = created["reviewId"].as_str().unwrap();
        assert!(!review_id.is_empty());

        // Reading back yields identical field values.
        let (status, fetched) =
            send_json(&app, "GET", &format!("/reviews/{review_id}"), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_generates_unique_ids() {
        let app = create_app(AppState::default());
        let mut ids = HashSet::new();

        for _ in 0..25 {
            let (status, created) = send_json(
                &app,
                "POST",
                "/reviews",
                Some(r#"{"seId":"s1","tyId":"t1"}"#),
            )
            .await;

            assert_eq!(status, StatusCode::CREATED);
            ids.insert(created["reviewId"].as_str().unwrap().to_string());
        }

        assert_eq!(ids.len(), 25);
    }

    #[tokio::test]
    async fn test_create_reports_every_missing_field() {
        let app = create_app(AppState::default());
        let (status, json) = send_json(&app, "POST", "/reviews", Some("{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({
                "errors": ["seId is a required field", "tyId is a required field"]
            })
        );
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let app = create_app(AppState::default());
        let (status, json) = send_json(&app, "POST", "/reviews", Some("{invalid json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = json["error"].as_str().unwrap();
        assert!(message.starts_with("invalid request body format : "));
        // The parser diagnostic is echoed to aid debugging.
        assert!(message.contains("line 1"));
    }

    #[tokio::test]
    async fn test_create_keeps_extra_fields() {
        let app = create_app(AppState::default());

        let (status, created) = send_json(
            &app,
            "POST",
            "/reviews",
            Some(r#"{"seId":"s1","tyId":"t1","rating":5,"tags":["a","b"]}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["rating"], 5);
        assert_eq!(created["tags"], serde_json::json!(["a", "b"]));

        let review_id = created["reviewId"].as_str().unwrap();
        let (_, fetched) = send_json(&app, "GET", &format!("/reviews/{review_id}"), None).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_ignores_caller_supplied_id() {
        let app = create_app(AppState::default());

        let (_, created) = send_json(
            &app,
            "POST",
            "/reviews",
            Some(r#"{"seId":"s1","tyId":"t1","reviewId":"spoofed"}"#),
        )
        .await;

        assert_ne!(created["reviewId"], "spoofed");
    }

    #[tokio::test]
    async fn test_get_nonexistent_returns_404() {
        let app = create_app(AppState::default());
        let (status, json) = send_json(&app, "GET", "/reviews/missing", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "error": "not found" }));
    }

    #[tokio::test]
    async fn test_update_forces_path_id() {
        let app = create_app(AppState::default());

        let (_, created) = send_json(
            &app,
            "POST",
            "/reviews",
            Some(r#"{"seId":"s1","tyId":"t1"}"#),
        )
        .await;
        let review_id = created["reviewId"].as_str().unwrap().to_string();

        let (status, updated) = send_json(
            &app,
            "PUT",
            &format!("/reviews/{review_id}"),
            Some(r#"{"seId":"s2","tyId":"t2","reviewId":"other"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["reviewId"], review_id.as_str());
        assert_eq!(updated["seId"], "s2");
        assert_eq!(updated["tyId"], "t2");
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let app = create_app(AppState::default());

        let (_, created) = send_json(
            &app,
            "POST",
            "/reviews",
            Some(r#"{"seId":"s1","tyId":"t1","tyReview":"old","rating":2}"#),
        )
        .await;
        let review_id = created["reviewId"].as_str().unwrap().to_string();

        let (status, updated) = send_json(
            &app,
            "PUT",
            &format!("/reviews/{review_id}"),
            Some(r#"{"seId":"s1","tyId":"t1"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(updated.get("tyReview").is_none());
        assert!(updated.get("rating").is_none());

        let (_, fetched) = send_json(&app, "GET", &format!("/reviews/{review_id}"), None).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_nonexistent_returns_404_without_writing() {
        let app = create_app(AppState::default());

        let (status, json) = send_json(
            &app,
            "PUT",
            "/reviews/abc",
            Some(r#"{"seId":"s1","tyId":"t1"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "error": "not found" }));

        // Update never creates.
        let (_, listed) = send_json(&app, "GET", "/reviews", None).await;
        assert_eq!(listed, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_update_validates_body() {
        let app = create_app(AppState::default());

        let (_, created) = send_json(
            &app,
            "POST",
            "/reviews",
            Some(r#"{"seId":"s1","tyId":"t1"}"#),
        )
        .await;
        let review_id = created["reviewId"].as_str().unwrap().to_string();

        let (status, json) = send_json(
            &app,
            "PUT",
            &format!("/reviews/{review_id}"),
            Some(r#"{"tyReview":"only content"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_review_is_terminal() {
        let app = create_app(AppState::default());

        let (_, created) = send_json(
            &app,
            "POST",
            "/reviews",
            Some(r#"{"seId":"s1","tyId":"t1"}"#),
        )
        .await;
        let review_id = created["reviewId"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "DELETE", &format!("/reviews/{review_id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _) = send(&app, "GET", &format!("/reviews/{review_id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_returns_404() {
        let app = create_app(AppState::default());
        let (status, json) = send_json(&app, "DELETE", "/reviews/missing", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "error": "not found" }));
    }

    #[tokio::test]
    async fn test_list_returns_created_reviews() {
        let app = create_app(AppState::default());

        for se_id in ["s1", "s2", "s3"] {
            let body = format!(r#"{{"seId":"{se_id}","tyId":"t1"}}"#);
            send(&app, "POST", "/reviews", Some(&body)).await;
        }

        let (status, listed) = send_json(&app, "GET", "/reviews", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 3);
    }

    fn upload_notification(key: &str) -> String {
        format!(
            r#"{{"Records":[{{"s3":{{"bucket":{{"name":"uploads"}},"object":{{"key":"{key}"}}}}}}]}}"#
        )
    }

    #[tokio::test]
    async fn test_ingest_parses_uploaded_object() {
        let store = Arc::new(MemoryObjectStore::new());
        store
            .put("uploads", "reviews.csv", "seId,tyId\ns1,t1\ns2,t2\n")
            .await;

        let state = AppState::build(
            Arc::new(InMemoryRepository::new()),
            store,
            &Config::default(),
        );
        let app = create_app(state);

        let (status, body) = send(
            &app,
            "POST",
            "/ingest",
            Some(&upload_notification("reviews.csv")),
        )
        .await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_ingest_decodes_object_key() {
        let store = Arc::new(MemoryObjectStore::new());
        store
            .put("uploads", "monthly reviews.csv", "seId,tyId\ns1,t1\n")
            .await;

        let state = AppState::build(
            Arc::new(InMemoryRepository::new()),
            store,
            &Config::default(),
        );
        let app = create_app(state);

        let (status, _) = send(
            &app,
            "POST",
            "/ingest",
            Some(&upload_notification("monthly+reviews.csv")),
        )
        .await;

        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_ingest_missing_object_is_acknowledged() {
        let app = create_app(AppState::default());

        let (status, _) = send(
            &app,
            "POST",
            "/ingest",
            Some(&upload_notification("missing.csv")),
        )
        .await;

        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_ingest_empty_notification_is_acknowledged() {
        let app = create_app(AppState::default());
        let (status, _) = send(&app, "POST", "/ingest", Some(r#"{"Records":[]}"#)).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
