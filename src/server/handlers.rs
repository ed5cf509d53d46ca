use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::link::{self, ResolvedPin};

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/pin ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PinQuery {
    pub link: Option<String>,
    /// Set to "false" to skip the redirect hop.
    pub expand: Option<String>,
}

pub async fn pin(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PinQuery>,
) -> Result<Json<ResolvedPin>, Response> {
    let start = Instant::now();

    let link = params.link.as_deref().unwrap_or("").trim();
    if link.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing 'link' parameter").into_response());
    }

    let already_expanded = params.expand.as_deref() == Some("false");
    let resolved = link::resolve_share_link(&state.expander, link, already_expanded);

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/pin link={} -> {} ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        link,
        resolved
            .coordinate
            .map(|c| c.formatted())
            .unwrap_or_else(|| "no coordinate".into()),
        elapsed.as_secs_f64() * 1000.0,
    );

    // A miss is still a 200 — the caller renders "no marker".
    Ok(Json(resolved))
}
