use crate::collect::{collect_metadata, CollectorConfig};
use crate::export::{render_csv, render_json};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the service router with its two metadata routes.
pub fn router(config: CollectorConfig) -> Router {
    Router::new()
        .route("/get-metadata-csv", get(get_metadata_csv))
        .route("/get-metadata-json", get(get_metadata_json))
        .with_state(Arc::new(config))
}

/// Binds `addr` and serves the metadata routes until the process exits.
pub async fn run(addr: SocketAddr, config: CollectorConfig) -> anyhow::Result<()> {
    info!("Listening on http://{}", addr);
    axum::Server::bind(&addr)
        .serve(router(config).into_make_service())
        .await?;
    Ok(())
}

/// A pipeline failure translated to a 500 response.
///
/// The process keeps serving; the failed run is logged and reported to the
/// requesting client only.
struct ServiceError(anyhow::Error);

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error!("metadata collection failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metadata collection failed: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for ServiceError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// `GET /get-metadata-csv`: recompute the metadata and serve it as a CSV
/// attachment named `metadata.csv`.
async fn get_metadata_csv(
    State(config): State<Arc<CollectorConfig>>,
) -> Result<impl IntoResponse, ServiceError> {
    let records = collect_metadata(&config).await?;
    let body = render_csv(&records)?;
    info!("Serving CSV metadata for {} record(s)", records.len());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"metadata.csv\"",
            ),
        ],
        body,
    ))
}

/// `GET /get-metadata-json`: recompute the metadata and serve it as a JSON
/// array.
async fn get_metadata_json(
    State(config): State<Arc<CollectorConfig>>,
) -> Result<impl IntoResponse, ServiceError> {
    let records = collect_metadata(&config).await?;
    let body = render_json(&records)?;
    info!("Serving JSON metadata for {} record(s)", records.len());
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
