use anyhow::Result;
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    routing::get,
    Extension, Router,
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    services::{ServeDir, ServeFile},
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;
use utoipa::OpenApi;

pub(crate) mod handlers;

/// Location of the compiled web bundle.
#[derive(Clone, Debug)]
pub struct Bundle {
    dir: PathBuf,
}

impl Bundle {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The page every client-side route resolves to.
    #[must_use]
    pub fn index(&self) -> PathBuf {
        self.dir.join("index.html")
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health::health),
    components(schemas(handlers::health::Health)),
    tags(
        (name = "windowfix", description = "WindowFix Pro static site server")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Build the router: `/health` plus the bundle with an `index.html` fallback.
#[must_use]
pub fn router(bundle: Bundle) -> Router {
    let assets = ServeDir::new(bundle.dir()).fallback(ServeFile::new(bundle.index()));

    Router::new()
        .route(
            "/health",
            get(handlers::health).options(handlers::health),
        )
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(Extension(Arc::new(bundle))),
        )
}

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(port: u16, dist: PathBuf) -> Result<()> {
    let app = router(Bundle::new(dist));

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Gracefully shutdown");
    }
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::http::{Method, StatusCode};
    use std::fs;
    use tower::ServiceExt;

    const INDEX: &str = "<!doctype html><html><body>windowfix</body></html>";

    fn bundle_with_index() -> Result<tempfile::TempDir> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("index.html"), INDEX)?;
        fs::write(dir.path().join("app.js"), "console.log('app');")?;
        Ok(dir)
    }

    async fn body_string(response: axum::response::Response) -> Result<String> {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() -> Result<()> {
        let dir = bundle_with_index()?;

        for path in ["/", "/services", "/forgot-password", "/dashboard"] {
            let response = router(Bundle::new(dir.path()))
                .oneshot(Request::builder().uri(path).body(Body::empty())?)
                .await?;
            assert_eq!(response.status(), StatusCode::OK, "path {path}");
            assert_eq!(body_string(response).await?, INDEX, "path {path}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn static_assets_are_served_as_is() -> Result<()> {
        let dir = bundle_with_index()?;
        let response = router(Bundle::new(dir.path()))
            .oneshot(Request::builder().uri("/app.js").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await?, "console.log('app');");
        Ok(())
    }

    #[tokio::test]
    async fn request_id_is_generated_and_propagated() -> Result<()> {
        let dir = bundle_with_index()?;
        let response = router(Bundle::new(dir.path()))
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;

        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        assert!(request_id.is_some_and(|id| Ulid::from_string(&id).is_ok()));

        let response = router(Bundle::new(dir.path()))
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok()),
            Some("abc-123")
        );
        Ok(())
    }

    #[tokio::test]
    async fn health_options_has_empty_body() -> Result<()> {
        let dir = bundle_with_index()?;
        let response = router(Bundle::new(dir.path()))
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/health")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("X-App"));
        assert!(body_string(response).await?.is_empty());
        Ok(())
    }

    #[test]
    fn openapi_documents_health() {
        let doc = openapi();
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
