use tracing::error;

use backend_domain::Registration;

use crate::{AppError, AppState};

pub async fn list_registrations(state: &AppState) -> Result<Vec<Registration>, AppError> {
    let inscricoes = state
        .registration_repo
        .list_registrations()
        .await
        .map_err(|err| {
            error!("failed to list registrations: {}", err);
            AppError::from(err)
        })?;
    Ok(inscricoes)
}
