use tracing::error;

use backend_domain::services::stats;
use backend_domain::DashboardStats;

use crate::{AppError, AppState};

/// The three snapshots are fetched concurrently; the aggregation itself is
/// pure and lives in the domain layer.
pub async fn dashboard_stats(state: &AppState) -> Result<DashboardStats, AppError> {
    let (eventos, palestrantes, inscricoes) = tokio::join!(
        state.event_repo.list_events(),
        state.speaker_repo.list_speakers(),
        state.registration_repo.list_registrations(),
    );

    let eventos = eventos.map_err(|err| {
        error!("dashboard: failed to list events: {}", err);
        AppError::from(err)
    })?;
    let palestrantes = palestrantes.map_err(|err| {
        error!("dashboard: failed to list speakers: {}", err);
        AppError::from(err)
    })?;
    let inscricoes = inscricoes.map_err(|err| {
        error!("dashboard: failed to list registrations: {}", err);
        AppError::from(err)
    })?;

    Ok(stats::build_stats(&eventos, &palestrantes, &inscricoes))
}
