use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use backend_application::commands::registration_commands;
use backend_application::queries::registration_queries;
use backend_application::AppState;
use backend_domain::{Registration, RegistrationDraft};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_registrations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Registration>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let inscricoes = registration_queries::list_registrations(&state).await?;
    Ok(Json(inscricoes))
}

pub async fn create_registration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<RegistrationDraft>,
) -> Result<(StatusCode, Json<Registration>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let inscricao = registration_commands::create_registration(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(inscricao)))
}

pub async fn update_registration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(draft): Json<RegistrationDraft>,
) -> Result<Json<Registration>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let inscricao = registration_commands::update_registration(&state, id, draft).await?;
    Ok(Json(inscricao))
}

pub async fn delete_registration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    registration_commands::delete_registration(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
