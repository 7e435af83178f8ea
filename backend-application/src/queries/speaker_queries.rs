use tracing::error;

use backend_domain::Speaker;

use crate::{AppError, AppState};

pub async fn list_speakers(state: &AppState) -> Result<Vec<Speaker>, AppError> {
    let palestrantes = state.speaker_repo.list_speakers().await.map_err(|err| {
        error!("failed to list speakers: {}", err);
        AppError::from(err)
    })?;
    Ok(palestrantes)
}

pub async fn get_speaker(state: &AppState, id: i64) -> Result<Speaker, AppError> {
    let palestrante = state.speaker_repo.find_speaker_by_id(id).await?;
    Ok(palestrante)
}
