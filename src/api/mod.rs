use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;

pub mod fortune;

pub struct QsQuery<T>(pub T);

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/fortune", post(fortune::create_fortune))
        .route("/api/categories", get(fortune::list_categories))
        .route("/_health", get(|| async { axum::Json(serde_json::json!({ "version": env!("CARGO_PKG_VERSION") })) }))
        .with_state(state)
}

#[async_trait]
impl<S, T> FromRequestParts<S> for QsQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = axum::http::StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or("");
        match serde_qs::from_str(query) {
            Ok(v) => Ok(QsQuery(v)),
            Err(e) => {
                tracing::warn!(error = %e, query, "Rejected query string");
                Err(axum::http::StatusCode::BAD_REQUEST)
            }
        }
    }
}
