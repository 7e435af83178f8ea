use tracing::error;

use backend_domain::Event;

use crate::{AppError, AppState};

pub async fn list_events(state: &AppState) -> Result<Vec<Event>, AppError> {
    let eventos = state.event_repo.list_events().await.map_err(|err| {
        error!("failed to list events: {}", err);
        AppError::from(err)
    })?;
    Ok(eventos)
}

pub async fn get_event(state: &AppState, id: i64) -> Result<Event, AppError> {
    let evento = state
        .event_repo
        .find_event_by_id(&id.to_string())
        .await?;
    Ok(evento)
}
