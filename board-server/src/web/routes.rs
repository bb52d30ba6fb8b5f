//! HTTP route handlers.
//!
//! Each endpoint maps one browser event onto one session operation:
//! typing drives the suggestion search, a suggestion click selects a
//! station, the refresh button re-fetches the current board.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;
use tower_http::services::ServeDir;

use crate::board::build_arrivals;
use crate::domain::ShortCode;
use crate::session::{Directive, SelectionState, SessionError, SessionEvent};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/board", get(board_query))
        .route("/api/session/select", post(select_station))
        .route("/api/session/refresh", post(refresh_board))
        .route("/api/session/dismiss", post(dismiss_suggestions))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Main page with the search box and board container.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let default_station = {
        let session = state.session.lock().await;
        match session.selection() {
            SelectionState::Selected(code) => {
                state.stations.resolve(code).await.map(|s| s.name)
            }
            SelectionState::Uninitialized => None,
        }
    };

    Html(
        IndexTemplate { default_station }
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Suggestion search as the user types.
///
/// Does not touch the selection: searching and the displayed board are
/// independent. An empty result means "hide the dropdown".
async fn search_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<StationSearchRequest>,
) -> Result<Response, AppError> {
    let directive = {
        let mut session = state.session.lock().await;
        state
            .stations
            .with_index(|index| session.handle(index, SessionEvent::TextChanged(req.q)))
            .await?
    };

    let stations = match directive {
        Directive::ShowSuggestions(stations) => stations,
        _ => Vec::new(),
    };

    if accepts_html(&headers) {
        let template = SuggestionsTemplate {
            stations: stations.iter().map(StationView::from_station).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let stations = stations.iter().map(StationResult::from_station).collect();
        Ok(Json(StationSearchResponse { stations }).into_response())
    }
}

/// Direct board lookup by station code.
///
/// Read-only: does not touch the session selection. Useful for
/// bookmarkable lookups and JSON clients that manage no session.
async fn board_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<BoardQueryRequest>,
) -> Result<Response, AppError> {
    let code = ShortCode::parse_normalized(&req.station).map_err(|_| AppError::BadRequest {
        message: format!("Invalid station code: {}", req.station),
    })?;

    render_board(&state, &code, &headers).await
}

/// Select a station picked from the suggestions and render its board.
async fn select_station(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SelectStationRequest>,
) -> Result<Response, AppError> {
    let code = ShortCode::parse_normalized(&req.code).map_err(|_| AppError::BadRequest {
        message: format!("Invalid station code: {}", req.code),
    })?;

    let directive = {
        let mut session = state.session.lock().await;
        state
            .stations
            .with_index(|index| session.handle(index, SessionEvent::StationChosen(code)))
            .await?
    };

    match directive {
        Directive::FetchBoard(code) => render_board(&state, &code, &headers).await,
        other => Err(AppError::Internal {
            message: format!("unexpected directive for selection: {other:?}"),
        }),
    }
}

/// Re-fetch the board for the currently selected station.
///
/// The one user-surfaced failure: refreshing with no selection is a
/// precondition error, not a silent no-op.
async fn refresh_board(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let directive = {
        let mut session = state.session.lock().await;
        state
            .stations
            .with_index(|index| session.handle(index, SessionEvent::RefreshRequested))
            .await?
    };

    match directive {
        Directive::FetchBoard(code) => render_board(&state, &code, &headers).await,
        other => Err(AppError::Internal {
            message: format!("unexpected directive for refresh: {other:?}"),
        }),
    }
}

/// Click-outside: hide the suggestion dropdown.
async fn dismiss_suggestions(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut session = state.session.lock().await;
    state
        .stations
        .with_index(|index| session.handle(index, SessionEvent::DismissRequested))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fetch live trains for a station and render its arrival board.
///
/// A failed fetch degrades to an empty board ("No trains found") with a
/// warning; the user sees an empty state, not an error dialog.
async fn render_board(
    state: &AppState,
    code: &ShortCode,
    headers: &HeaderMap,
) -> Result<Response, AppError> {
    let station = state.stations.resolve(code).await;
    let station_name = station
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| code.as_str().to_string());

    let trains = match state.trains.live_trains(code).await {
        Ok(trains) => trains,
        Err(e) => {
            warn!(station = %code, error = %e, "board fetch failed; rendering empty board");
            std::sync::Arc::new(Vec::new())
        }
    };

    let entries = build_arrivals(&trains, code);

    if accepts_html(headers) {
        let template = BoardTemplate {
            station_name,
            entries: entries.iter().map(ArrivalView::from_entry).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let response = BoardResponse {
            station: StationResult {
                name: station_name,
                short_code: code.as_str().to_string(),
            },
            entries: entries.iter().map(ArrivalResult::from_entry).collect(),
        };
        Ok(Json(response).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NoStationSelected { message: String },
    Internal { message: String },
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NoStationSelected => AppError::NoStationSelected {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NoStationSelected { message } => (StatusCode::CONFLICT, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        warn!(status = %status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
