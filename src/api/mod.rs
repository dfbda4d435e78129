use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use validator::Validate;

use crate::food::dish::CopyTarget;
use crate::food::search::SearchOrchestrator;
use crate::food::state::SearchState;
use crate::i18n::{Language, UiStrings};
use crate::preferences::Theme;

#[derive(Clone)]
pub struct AppState {
    orchestrator: Arc<SearchOrchestrator>,
}

#[derive(Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    query: String,
}

#[derive(Serialize)]
pub struct SearchAccepted {
    generation: u64,
    query: String,
}

#[derive(Deserialize)]
pub struct LanguageRequest {
    language: Language,
}

#[derive(Deserialize)]
pub struct ThemeRequest {
    theme: Option<Theme>,
    #[serde(default)]
    toggle: bool,
}

#[derive(Serialize)]
pub struct PreferenceResponse {
    language: Language,
    theme: Theme,
    saved: bool,
}

#[derive(Serialize)]
pub struct StringsResponse {
    language: Language,
    rtl: bool,
    strings: &'static UiStrings,
}

#[derive(Serialize)]
struct ApiResponse {
    status: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse { status: message.into() })).into_response()
}

/// Create and configure the API router
pub fn create_api(orchestrator: Arc<SearchOrchestrator>) -> Router {
    let state = AppState { orchestrator };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_check))
        .route("/search", post(search_handler))
        .route("/state", get(state_handler))
        .route("/language", post(language_handler))
        .route("/theme", post(theme_handler))
        .route("/copy/:target", get(copy_handler))
        .route("/strings", get(strings_handler))
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Response {
    Json(ApiResponse {
        status: "Server is running and healthy".to_string(),
    })
    .into_response()
}

/// Starts a workflow and returns immediately; poll `/state` for progress.
async fn search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Response {
    if let Err(e) = request.validate() {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
    }

    let ticket = match state.orchestrator.start(&request.query) {
        Ok(ticket) => ticket,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    };

    let accepted = SearchAccepted {
        generation: ticket.generation,
        query: ticket.query.as_str().to_string(),
    };

    let orchestrator = state.orchestrator.clone();
    let generation = ticket.generation;
    tokio::spawn(async move {
        let outcome = orchestrator.run(ticket).await;
        info!("Search #{} ended: {:?}", generation, outcome);
    });

    (StatusCode::ACCEPTED, Json(accepted)).into_response()
}

async fn state_handler(State(state): State<AppState>) -> Json<SearchState> {
    Json(state.orchestrator.snapshot())
}

async fn language_handler(
    State(state): State<AppState>,
    Json(request): Json<LanguageRequest>,
) -> Json<PreferenceResponse> {
    let saved = match state.orchestrator.set_language(request.language) {
        Ok(()) => true,
        Err(e) => {
            warn!("Language not saved: {}", e);
            false
        }
    };
    Json(PreferenceResponse {
        language: state.orchestrator.language(),
        theme: state.orchestrator.theme(),
        saved,
    })
}

async fn theme_handler(
    State(state): State<AppState>,
    Json(request): Json<ThemeRequest>,
) -> Response {
    let result = match (request.toggle, request.theme) {
        (true, _) => state.orchestrator.toggle_theme().map(|_| ()),
        (false, Some(theme)) => state.orchestrator.set_theme(theme),
        (false, None) => {
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Provide a theme (light or dark) or toggle: true",
            )
        }
    };

    let saved = match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Theme not saved: {}", e);
            false
        }
    };
    Json(PreferenceResponse {
        language: state.orchestrator.language(),
        theme: state.orchestrator.theme(),
        saved,
    })
    .into_response()
}

async fn copy_handler(State(state): State<AppState>, Path(target): Path<String>) -> Response {
    let target: CopyTarget = match target.parse() {
        Ok(target) => target,
        Err(e) => return error_response(StatusCode::NOT_FOUND, e),
    };

    match state.orchestrator.copy_text(target) {
        Some(text) => ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "No dish to copy from yet"),
    }
}

async fn strings_handler(State(state): State<AppState>) -> Json<StringsResponse> {
    let language = state.orchestrator.language();
    Json(StringsResponse {
        language,
        rtl: language.is_rtl(),
        strings: language.strings(),
    })
}
