//! HTTP boundary: request parsing and response encoding around the
//! stateless assembler.

pub mod error;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/generate", post(handlers::generate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    async fn post_generate(body: &str) -> axum::response::Response {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        build_router().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = build_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_returns_docx_attachment() {
        let response = post_generate(r#"{"topic": "Экология города", "plan": null}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"project.docx\""
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_generate_with_empty_body_object() {
        let response = post_generate("{}").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_generate_with_opaque_plan() {
        let response =
            post_generate(r#"{"topic": "Тема", "plan": {"sections": ["a", "b"]}}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
