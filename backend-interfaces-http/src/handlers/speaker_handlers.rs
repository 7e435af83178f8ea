use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use backend_application::commands::speaker_commands;
use backend_application::queries::speaker_queries;
use backend_application::AppState;
use backend_domain::{Speaker, SpeakerDraft};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_speakers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Speaker>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let palestrantes = speaker_queries::list_speakers(&state).await?;
    Ok(Json(palestrantes))
}

pub async fn get_speaker(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Speaker>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let palestrante = speaker_queries::get_speaker(&state, id).await?;
    Ok(Json(palestrante))
}

pub async fn create_speaker(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<SpeakerDraft>,
) -> Result<(StatusCode, Json<Speaker>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let palestrante = speaker_commands::create_speaker(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(palestrante)))
}

pub async fn update_speaker(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(draft): Json<SpeakerDraft>,
) -> Result<Json<Speaker>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let palestrante = speaker_commands::update_speaker(&state, id, draft).await?;
    Ok(Json(palestrante))
}

pub async fn delete_speaker(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    speaker_commands::delete_speaker(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
