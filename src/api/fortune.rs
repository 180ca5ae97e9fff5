use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::QsQuery;
use crate::domain::fortune::{calculate_fortune, share_text, FortuneResult};
use crate::domain::request::{Category, FortuneRequest, Locale, CATEGORIES};
use crate::domain::seed::DayKey;
use crate::domain::validation::{error_messages, validate_today};
use crate::domain::FortuneError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneResponse {
    #[serde(flatten)]
    pub result: FortuneResult,
    pub share_text: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
}

#[derive(Debug)]
pub enum ApiError {
    Invalid(BTreeMap<&'static str, &'static str>),
    Fortune(FortuneError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(errors) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "errors": errors }))).into_response()
            }
            ApiError::Fortune(e @ FortuneError::UnknownLocale(_)) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": e.to_string() }))).into_response()
            }
            ApiError::Fortune(e) => {
                tracing::error!(error = %e, "Fortune composition failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({ "error": e.to_string() }))).into_response()
            }
        }
    }
}

impl From<FortuneError> for ApiError {
    fn from(e: FortuneError) -> Self {
        ApiError::Fortune(e)
    }
}

fn resolve_locale(state: &AppState, query: &LocaleQuery) -> Result<Locale, FortuneError> {
    match &query.locale {
        Some(raw) => raw.parse(),
        None => Ok(state.default_locale),
    }
}

pub async fn create_fortune(
    State(state): State<AppState>,
    QsQuery(query): QsQuery<LocaleQuery>,
    Json(request): Json<FortuneRequest>,
) -> Result<Json<FortuneResponse>, ApiError> {
    let locale = resolve_locale(&state, &query)?;

    let invalid = validate_today(&request);
    if !invalid.is_empty() {
        tracing::warn!(fields = ?invalid, "Rejected fortune request");
        return Err(ApiError::Invalid(error_messages(&invalid, locale)));
    }

    let result = calculate_fortune(&request, locale, DayKey::today(), &*state.templates)?;
    let share_text = share_text(&result, locale);
    tracing::info!(%locale, category = %request.selected_category, score = result.display_score(), "Fortune served");

    Ok(Json(FortuneResponse { result, share_text }))
}

pub async fn list_categories(
    State(state): State<AppState>,
    QsQuery(query): QsQuery<LocaleQuery>,
) -> Result<Json<Vec<CategoryInfo>>, ApiError> {
    let locale = resolve_locale(&state, &query)?;

    let categories = CATEGORIES
        .iter()
        .map(|&category| CategoryInfo {
            category,
            label: category.label(locale),
        })
        .collect();

    Ok(Json(categories))
}
