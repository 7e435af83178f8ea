use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use backend_application::commands::scan_commands;
use backend_application::dtos::{AcknowledgeReply, AcknowledgeRequest, ScanReply, ScanRequest};
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

/// One scanner frame. Failures are part of the reply body, not transport
/// errors: the scanner screen decides what to show the operator.
pub async fn resolve_scan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanReply>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let reply = scan_commands::resolve_scan(&state, request).await?;
    Ok(Json(reply))
}

/// Operator dismissed the failure alert; the scan lock is released without
/// waiting out the cool-down.
pub async fn acknowledge_scan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AcknowledgeRequest>,
) -> Result<Json<AcknowledgeReply>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let released = scan_commands::acknowledge_scan(&state, &request.session_id)?;
    Ok(Json(AcknowledgeReply { released }))
}
