use backend_domain::utils::digits_only;
use backend_domain::{Registration, RegistrationDraft, StoreError};

use crate::{AppError, AppState};

pub async fn create_registration(
    state: &AppState,
    draft: RegistrationDraft,
) -> Result<Registration, AppError> {
    let draft = validated(draft)?;
    // The chosen event must exist before a registration points at it.
    match state
        .event_repo
        .find_event_by_id(&draft.evento_id.to_string())
        .await
    {
        Ok(_) => {}
        Err(StoreError::NotFound) => {
            return Err(AppError::BadRequest(
                "evento_id does not match an event".to_string(),
            ))
        }
        Err(other) => return Err(other.into()),
    }
    let inscricao = state.registration_repo.insert_registration(&draft).await?;
    Ok(inscricao)
}

pub async fn update_registration(
    state: &AppState,
    id: i64,
    draft: RegistrationDraft,
) -> Result<Registration, AppError> {
    let draft = validated(draft)?;
    let inscricao = state
        .registration_repo
        .update_registration(id, &draft)
        .await?;
    Ok(inscricao)
}

pub async fn delete_registration(state: &AppState, id: i64) -> Result<(), AppError> {
    state.registration_repo.delete_registration(id).await?;
    Ok(())
}

fn validated(mut draft: RegistrationDraft) -> Result<RegistrationDraft, AppError> {
    draft.nome_completo = draft.nome_completo.trim().to_string();
    if draft.nome_completo.is_empty() {
        return Err(AppError::BadRequest("nome_completo is required".to_string()));
    }
    if digits_only(&draft.cpf).len() != 11 {
        return Err(AppError::BadRequest("cpf must have 11 digits".to_string()));
    }
    if !draft.email.trim().contains('@') {
        return Err(AppError::BadRequest("invalid email".to_string()));
    }
    if !draft.telefone.trim().is_empty() && digits_only(&draft.telefone).len() < 11 {
        return Err(AppError::BadRequest(
            "telefone must have 11 digits (DDD + number)".to_string(),
        ));
    }
    if draft.evento_id <= 0 {
        return Err(AppError::BadRequest("evento_id is required".to_string()));
    }
    Ok(draft)
}
