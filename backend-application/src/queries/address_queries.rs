use tracing::error;

use backend_domain::utils::digits_only;
use backend_domain::Address;

use crate::{AppError, AppState};

/// CEP lookup used to prefill an event's `local`. The CEP is normalized to
/// digits before it reaches the lookup service.
pub async fn lookup_address(state: &AppState, cep: &str) -> Result<Address, AppError> {
    let cep = digits_only(cep);
    if cep.len() != 8 {
        return Err(AppError::BadRequest(
            "cep must have exactly 8 digits".to_string(),
        ));
    }

    let endereco = state.postal.lookup(&cep).await.map_err(|err| {
        error!("postal lookup failed: {}", err);
        AppError::Internal(err)
    })?;
    endereco.ok_or(AppError::NotFound)
}
