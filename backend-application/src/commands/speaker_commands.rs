use backend_domain::utils::digits_only;
use backend_domain::{Speaker, SpeakerDraft};

use crate::{AppError, AppState};

pub async fn create_speaker(state: &AppState, draft: SpeakerDraft) -> Result<Speaker, AppError> {
    let draft = validated(draft)?;
    let palestrante = state.speaker_repo.insert_speaker(&draft).await?;
    Ok(palestrante)
}

pub async fn update_speaker(
    state: &AppState,
    id: i64,
    draft: SpeakerDraft,
) -> Result<Speaker, AppError> {
    let draft = validated(draft)?;
    let palestrante = state.speaker_repo.update_speaker(id, &draft).await?;
    Ok(palestrante)
}

pub async fn delete_speaker(state: &AppState, id: i64) -> Result<(), AppError> {
    state.speaker_repo.delete_speaker(id).await?;
    Ok(())
}

fn validated(mut draft: SpeakerDraft) -> Result<SpeakerDraft, AppError> {
    draft.nome = draft.nome.trim().to_string();
    if draft.nome.is_empty() {
        return Err(AppError::BadRequest("nome is required".to_string()));
    }
    if draft.especialidade.trim().is_empty() {
        return Err(AppError::BadRequest(
            "especialidade is required".to_string(),
        ));
    }
    if !is_plausible_email(&draft.email) {
        return Err(AppError::BadRequest("invalid email".to_string()));
    }
    if !draft.telefone.trim().is_empty() && digits_only(&draft.telefone).len() < 10 {
        return Err(AppError::BadRequest("invalid telefone".to_string()));
    }
    Ok(draft)
}

fn is_plausible_email(raw: &str) -> bool {
    let raw = raw.trim();
    let Some((user, host)) = raw.split_once('@') else {
        return false;
    };
    !user.is_empty() && host.contains('.') && !host.starts_with('.') && !host.ends_with('.')
}
