//! Static asset services.
//!
//! `/static/*` is served from a directory with tower-http's `ServeDir`,
//! which already refuses `..` traversal. In front of it sits a guard that
//! hides dotfiles and lets only GET/HEAD through; everything it refuses is
//! a plain 404, as if the file did not exist.

use axum::{
    body::Body,
    http::{Method, Request},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get_service, MethodRouter},
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};

use crate::http::error::AppError;

/// Whether any path segment names a hidden entry (`.env`, `.git/`, `..`).
pub fn has_hidden_segment(path: &str) -> bool {
    path.split('/').any(|segment| {
        segment.starts_with('.')
            || segment
                .get(..3)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("%2e"))
    })
}

/// Reject anything a read-only file tree should not answer.
pub async fn static_guard(request: Request<Body>, next: Next) -> Response {
    let method = request.method();
    if (method != Method::GET && method != Method::HEAD)
        || has_hidden_segment(request.uri().path())
    {
        return AppError::NotFound.into_response();
    }
    next.run(request).await
}

/// Service for the static directory, to be nested under `/static`.
pub fn static_service(dir: &Path) -> MethodRouter {
    let service = ServiceBuilder::new()
        .layer(middleware::from_fn(static_guard))
        .service(ServeDir::new(dir));
    axum::routing::any_service(service)
}

/// Service for the root document.
pub fn root_document<S>(index_file: &Path) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get_service(ServeFile::new(index_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, Router};
    use tower::ServiceExt;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("static")).unwrap();
        std::fs::write(dir.path().join("static/app.js"), "console.log(1);").unwrap();
        std::fs::write(dir.path().join("static/.env"), "SECRET=1").unwrap();
        std::fs::create_dir(dir.path().join("static/docs")).unwrap();
        std::fs::write(dir.path().join("static/docs/index.html"), "<p>docs</p>").unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>root</h1>").unwrap();
        std::fs::write(dir.path().join("secret.txt"), "outside").unwrap();
        dir
    }

    fn app(root: &Path) -> Router {
        Router::new()
            .route("/", root_document(&root.join("index.html")))
            .nest_service("/static", static_service(&root.join("static")))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[test]
    fn test_hidden_segments() {
        assert!(has_hidden_segment("/.env"));
        assert!(has_hidden_segment("/a/.git/config"));
        assert!(has_hidden_segment("/%2e%2e/secret.txt"));
        assert!(has_hidden_segment("/%2Eenv"));
        assert!(!has_hidden_segment("/app.js"));
        assert!(!has_hidden_segment("/docs/v1.2/notes.txt"));
    }

    #[tokio::test]
    async fn test_serves_file() {
        let root = fixture();
        let (status, body) = get(app(root.path()), "/static/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1);");
    }

    #[tokio::test]
    async fn test_content_type_guessed() {
        let root = fixture();
        let response = app(root.path())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_directory_index() {
        let root = fixture();
        let (status, body) = get(app(root.path()), "/static/docs/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<p>docs</p>");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let root = fixture();
        let (status, _) = get(app(root.path()), "/static/nope.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dotfile_hidden() {
        let root = fixture();
        let (status, body) = get(app(root.path()), "/static/.env").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("SECRET"));
    }

    #[tokio::test]
    async fn test_traversal_rejected() {
        let root = fixture();
        let (status, body) = get(app(root.path()), "/static/%2e%2e/secret.txt").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("outside"));
    }

    #[tokio::test]
    async fn test_post_to_static_is_not_found() {
        let root = fixture();
        let response = app(root.path())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/static/app.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_root_document() {
        let root = fixture();
        std::fs::remove_file(root.path().join("index.html")).unwrap();
        let (status, _) = get(app(root.path()), "/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
