use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::dashboard_queries;
use backend_application::AppState;
use backend_domain::DashboardStats;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn dashboard_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardStats>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let stats = dashboard_queries::dashboard_stats(&state).await?;
    Ok(Json(stats))
}
