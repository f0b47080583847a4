use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::{
    handler::{
        clock_in_handler, clock_out_handler, create_record_handler, db_status_handler,
        list_employees_handler, list_notes_handler, list_records_handler, not_found_handler,
        root_handler, save_note_handler, status_handler, upload_handler,
    },
    AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/status", get(status_handler))
        .route("/api/db-status", get(db_status_handler))
        .route("/api/employees", get(list_employees_handler))
        .route(
            "/api/records",
            get(list_records_handler).post(create_record_handler),
        )
        .route("/api/test-record", post(create_record_handler))
        .route("/api/save", post(save_note_handler))
        .route("/api/notes", get(list_notes_handler))
        .route("/api/upload", post(upload_handler))
        .route("/api/clock-in", post(clock_in_handler))
        .route("/api/clock-out", post(clock_out_handler))
        .nest_service("/public", ServeDir::new("public"))
        .fallback(not_found_handler)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{config::Config, database::Database, AppState};

    fn test_app(upload_dir: &str) -> Router {
        let config = Config {
            database_url: "postgres://127.0.0.1:1/unreachable".to_string(),
            port: 0,
            upload_dir: std::env::temp_dir().join(upload_dir),
        };
        let db = Database::disconnected(&config.database_url);
        create_router(Arc::new(AppState { db, config }))
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_reports_running() {
        let response = test_app("hr-test-root")
            .oneshot(empty_request(Method::GET, "/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Server is running!" })
        );
    }

    #[tokio::test]
    async fn partial_record_is_rejected_before_persistence() {
        // the store handle is unreachable, so anything but a 400 here would
        // mean validation let the request through to the database
        let response = test_app("hr-test-partial")
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                json!({ "name": "John" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "email required");
    }

    #[tokio::test]
    async fn valid_record_against_unreachable_store_is_a_500() {
        let response = test_app("hr-test-unreachable")
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                json!({ "name": "John", "email": "j@x.com" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to reach the database");
    }

    #[tokio::test]
    async fn record_listing_fails_with_500_when_store_is_unreachable() {
        let response = test_app("hr-test-list")
            .oneshot(empty_request(Method::GET, "/api/records"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn note_without_text_is_rejected() {
        let response = test_app("hr-test-note")
            .oneshot(json_request(Method::POST, "/api/save", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "text required");
    }

    #[tokio::test]
    async fn db_status_reports_disconnected_with_503() {
        let response = test_app("hr-test-db-status")
            .oneshot(empty_request(Method::GET, "/api/db-status"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await, json!({ "message": "Disconnected" }));
    }

    #[tokio::test]
    async fn status_reports_disconnected_with_500() {
        let response = test_app("hr-test-status")
            .oneshot(empty_request(Method::GET, "/api/status"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["server"], "Server is running");
        assert_eq!(body["database"], "Disconnected");
    }

    #[tokio::test]
    async fn employees_sample_is_served() {
        let response = test_app("hr-test-employees")
            .oneshot(empty_request(Method::GET, "/api/employees"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let employees = body["employees"].as_array().unwrap();
        assert_eq!(employees.len(), 3);
        assert_eq!(employees[0]["name"], "John Doe");
        assert_eq!(employees[0]["position"], "Software Engineer");
    }

    #[tokio::test]
    async fn clock_endpoints_report_status_and_time() {
        let app = test_app("hr-test-clock");
        let response = app
            .clone()
            .oneshot(empty_request(Method::POST, "/api/clock-in"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "Clocked in");
        assert_eq!(body["time"].as_str().unwrap().len(), "00:00:00".len());

        let response = app
            .oneshot(empty_request(Method::POST, "/api/clock-out"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["status"], "Clocked out");
    }

    #[tokio::test]
    async fn unmatched_routes_get_the_json_404() {
        let response = test_app("hr-test-404")
            .oneshot(empty_request(Method::GET, "/api/nothing-here"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Route not found" })
        );
    }

    fn multipart_request(uri: &str, body: String, boundary: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn upload_without_a_file_is_rejected() {
        let boundary = "hr-test-boundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nno file here\r\n--{boundary}--\r\n"
        );
        let response = test_app("hr-test-upload-empty")
            .oneshot(multipart_request("/api/upload", body, boundary))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "no file provided");
    }

    #[tokio::test]
    async fn uploaded_file_is_stored_and_named() {
        let boundary = "hr-test-boundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"hello.txt\"\r\nContent-Type: text/plain\r\n\r\nhi there\r\n--{boundary}--\r\n"
        );
        let response = test_app("hr-test-upload")
            .oneshot(multipart_request("/api/upload", body, boundary))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "filename": "hello.txt" }));

        let stored = std::env::temp_dir().join("hr-test-upload").join("hello.txt");
        assert_eq!(tokio::fs::read_to_string(stored).await.unwrap(), "hi there");
    }
}
