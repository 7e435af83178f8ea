use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use backend_application::commands::event_commands;
use backend_application::queries::event_queries;
use backend_application::AppState;
use backend_domain::{Event, EventDraft};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Event>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let eventos = event_queries::list_events(&state).await?;
    Ok(Json(eventos))
}

pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Event>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let evento = event_queries::get_event(&state, id).await?;
    Ok(Json(evento))
}

pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<Event>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let evento = event_commands::create_event(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(evento)))
}

pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let evento = event_commands::update_event(&state, id, draft).await?;
    Ok(Json(evento))
}

pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    event_commands::delete_event(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
