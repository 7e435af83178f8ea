use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::address_queries;
use backend_application::AppState;
use backend_domain::Address;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn lookup_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(cep): Path<String>,
) -> Result<Json<Address>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let endereco = address_queries::lookup_address(&state, &cep).await?;
    Ok(Json(endereco))
}
