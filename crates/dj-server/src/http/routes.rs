use super::{AppResult, AppState, INDEX_HTML};
use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Json},
    routing::{any, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;

const TRY_HINT: &str = "Try / or /briefing";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(index))
        .route("/ingest", post(ingest).fallback(try_hint))
        .route("/briefing", any(briefing))
        .fallback(try_hint)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn try_hint() -> &'static str {
    TRY_HINT
}

#[derive(Serialize)]
struct IngestResponse {
    ok: bool,
    count: usize,
}

/// POST /ingest — `{ "source"?: string, "text": string }`
///
/// The body is parsed leniently: any Content-Type, and a body that is not
/// JSON is treated the same as one without `text`.
async fn ingest(State(state): State<AppState>, body: Bytes) -> AppResult<Json<IngestResponse>> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let source = payload["source"].as_str();
    let text = payload["text"].as_str();

    let outcome = state.feedback.ingest(source, text)?;
    tracing::info!(
        source = %outcome.entry.source,
        count = outcome.count,
        "Feedback ingested"
    );

    Ok(Json(IngestResponse {
        ok: true,
        count: outcome.count,
    }))
}

/// GET /briefing — plain-text briefing, cached for the configured TTL.
async fn briefing(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let briefing = state.briefing_engine.briefing().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::HeaderName::from_static("x-briefing-cached"),
                if briefing.cached { "true" } else { "false" },
            ),
        ],
        briefing.text,
    ))
}
