use crate::{site::Bundle, GIT_COMMIT_HASH};
use axum::{
    body::Body,
    extract::Extension,
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Health {
    commit: String,
    name: String,
    version: String,
    bundle: String,
}

#[utoipa::path(
    get,
    path= "/health",
    responses (
        (status = 200, description = "Web bundle is present", body = [Health]),
        (status = 503, description = "Web bundle is missing", body = [Health])
    ),
    tag= "health"
)]
// axum handler for health
pub async fn health(method: Method, bundle: Extension<Arc<Bundle>>) -> impl IntoResponse {
    let index = bundle.0.index();
    let present = tokio::fs::metadata(&index)
        .await
        .is_ok_and(|metadata| metadata.is_file());

    if !present {
        error!("Bundle index not found: {}", index.display());
    }

    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bundle: if present {
            "ok".to_string()
        } else {
            "missing".to_string()
        },
    };

    let body = if method == Method::GET {
        Json(&health).into_response()
    } else {
        Body::empty().into_response()
    };

    let short_hash = if health.commit.len() > 7 {
        &health.commit[0..7]
    } else {
        ""
    };

    let headers = format!("{}:{}:{}", health.name, health.version, short_hash)
        .parse::<HeaderValue>()
        .map(|x_app_header_value| {
            debug!("X-App header: {:?}", x_app_header_value);

            let mut headers = HeaderMap::new();

            headers.insert("X-App", x_app_header_value);

            headers
        })
        .map_err(|err| {
            error!("Failed to parse X-App header: {}", err);
        });

    // Unwrap the headers or provide a default value (empty headers) in case of an error
    let headers = headers.unwrap_or_else(|()| HeaderMap::new());

    let status = if present {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, headers, body)
}

#[cfg(test)]
mod tests {
    use crate::site::{router, Bundle};
    use anyhow::Result;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use std::fs;
    use tower::ServiceExt;

    async fn get_health(bundle: Bundle) -> Result<(StatusCode, Value)> {
        let response = router(bundle)
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    #[tokio::test]
    async fn health_reports_present_bundle() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("index.html"), "<html></html>")?;

        let (status, body) = get_health(Bundle::new(dir.path())).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bundle"], "ok");
        assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        Ok(())
    }

    #[tokio::test]
    async fn health_reports_missing_bundle() -> Result<()> {
        let dir = tempfile::tempdir()?;

        let (status, body) = get_health(Bundle::new(dir.path())).await?;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["bundle"], "missing");
        Ok(())
    }
}
