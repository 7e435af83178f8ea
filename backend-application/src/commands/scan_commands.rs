use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{info, warn};

use backend_domain::services::classifier::{self, Classified};
use backend_domain::{
    PayloadFormat, Resolution, ScanFailure, ScanLogEntry, SessionId, StoreError,
    MAX_LOGGED_PAYLOAD,
};

use crate::dtos::{ScanReply, ScanRequest};
use crate::scan::{ScanSession, ScanTicket};
use crate::{AppError, AppState};

/// Resolves one scanner frame. The session lock is taken before any store
/// traffic; a frame arriving while a resolution is in flight is discarded.
/// The resolution itself runs in a spawned task so a torn-down client
/// cannot wedge the lock or act on a stale result.
pub async fn resolve_scan(state: &AppState, request: ScanRequest) -> Result<ScanReply, AppError> {
    let session_id = parse_session_id(&request.session_id)?;
    let session = state.scan_sessions.session(&session_id);

    let Some(ticket) = session.try_begin() else {
        state.metrics.record_scan_discarded();
        return Ok(ScanReply::Discarded);
    };

    let task = tokio::spawn(run_resolution(
        state.clone(),
        session,
        ticket,
        request.payload,
        request.user_id,
    ));
    let resolution = task
        .await
        .map_err(|err| AppError::Internal(anyhow::anyhow!("scan task failed: {err}")))?;

    Ok(match resolution {
        Resolution::Found(evento) => ScanReply::Found { evento },
        Resolution::Failed(reason) => ScanReply::Failed {
            reason,
            message: reason.message().to_string(),
        },
    })
}

/// Operator acknowledgement of a failed scan: clears the lock without
/// waiting out the cool-down. Safe to call at any time.
pub fn acknowledge_scan(state: &AppState, session_id: &str) -> Result<bool, AppError> {
    let session_id = parse_session_id(session_id)?;
    Ok(state.scan_sessions.acknowledge(&session_id))
}

fn parse_session_id(raw: &str) -> Result<SessionId, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("session_id is required".to_string()));
    }
    Ok(SessionId(trimmed.to_string()))
}

async fn run_resolution(
    state: AppState,
    session: Arc<ScanSession>,
    ticket: ScanTicket,
    payload: String,
    user_id: Option<String>,
) -> Resolution {
    let (format, resolution) = resolve_payload(&state, &payload).await;

    let logged: String = payload.chars().take(MAX_LOGGED_PAYLOAD).collect();
    info!(
        payload = %logged,
        format = format.as_str(),
        outcome = resolution.outcome_str(),
        "scan resolved"
    );

    match resolution {
        Resolution::Found(_) => state.metrics.record_scan_found(),
        Resolution::Failed(_) => state.metrics.record_scan_failed(),
    }

    if state.config.scan_log_enabled {
        spawn_scan_log(&state, user_id, &payload, format, &resolution);
    }

    session.settle_after(ticket, Duration::from_millis(state.config.scan_cooldown_ms));
    resolution
}

/// Classification plus the single store lookup. No store call is made for
/// unrecognized or malformed payloads.
async fn resolve_payload(state: &AppState, payload: &str) -> (PayloadFormat, Resolution) {
    let (format, id) = match classifier::classify(payload) {
        Classified::Unrecognized => {
            return (
                PayloadFormat::Unrecognized,
                Resolution::Failed(ScanFailure::UnsupportedFormat),
            )
        }
        Classified::Malformed { format } => {
            return (format, Resolution::Failed(ScanFailure::Malformed))
        }
        Classified::Id { format, id } => (format, id),
    };

    let store_timeout = Duration::from_secs(state.config.store_timeout_seconds);
    let outcome = match timeout(store_timeout, state.event_repo.find_event_by_id(&id)).await {
        Err(_) => Resolution::Failed(ScanFailure::Timeout),
        Ok(Ok(evento)) => Resolution::Found(evento),
        Ok(Err(StoreError::NotFound)) => Resolution::Failed(ScanFailure::NotFound),
        Ok(Err(StoreError::Timeout)) => Resolution::Failed(ScanFailure::Timeout),
        Ok(Err(StoreError::Unavailable(err))) => {
            warn!("event lookup failed: {}", err);
            state.metrics.record_store_error();
            Resolution::Failed(ScanFailure::StoreUnavailable)
        }
    };
    (format, outcome)
}

fn spawn_scan_log(
    state: &AppState,
    user_id: Option<String>,
    payload: &str,
    format: PayloadFormat,
    resolution: &Resolution,
) {
    let entry = ScanLogEntry::qr_scan(
        user_id,
        payload,
        format.as_str(),
        resolution.outcome_str(),
    );
    let repo = state.scan_log_repo.clone();
    tokio::spawn(async move {
        if let Err(err) = repo.insert_scan_log(&entry).await {
            warn!("scan log insert failed: {}", err);
        }
    });
}
