mod page;
mod routes;

pub use page::INDEX_HTML;
pub use routes::create_router;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dj_core::{
    BriefingConfig, BriefingEngine, Clock, DjError, FeedbackConfig, FeedbackStore, KvStore,
    TextGenerator,
};
use serde::Serialize;
use std::sync::Arc;

/// Feedback accessor type shared across HTTP handlers
pub type HttpFeedbackStore = FeedbackStore<dyn KvStore>;

/// Concrete briefing engine type shared across HTTP handlers
pub type HttpBriefingEngine = BriefingEngine<dyn KvStore, dyn TextGenerator>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub feedback: Arc<HttpFeedbackStore>,
    pub briefing_engine: Arc<HttpBriefingEngine>,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn KvStore>,
        generator: Arc<dyn TextGenerator>,
        clock: Arc<dyn Clock>,
        feedback_config: FeedbackConfig,
        briefing_config: BriefingConfig,
    ) -> Self {
        let feedback = Arc::new(FeedbackStore::new(
            storage.clone(),
            clock.clone(),
            feedback_config,
        ));
        let briefing_engine = Arc::new(BriefingEngine::new(
            storage,
            feedback.clone(),
            generator,
            clock,
            briefing_config,
        ));
        Self {
            feedback,
            briefing_engine,
        }
    }
}

/// Error body: `{"error": "..."}`
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Custom error type for HTTP handlers
pub enum AppError {
    /// Caller's fault; nothing was written.
    BadRequest(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<DjError> for AppError {
    fn from(err: DjError) -> Self {
        match err {
            DjError::Validation(msg) => AppError::BadRequest(msg),
            other => AppError::Internal(other.into()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
