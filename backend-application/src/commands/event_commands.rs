use backend_domain::utils::parse_event_date;
use backend_domain::{Event, EventDraft};

use crate::{AppError, AppState};

pub async fn create_event(state: &AppState, draft: EventDraft) -> Result<Event, AppError> {
    let draft = validated(draft)?;
    let evento = state.event_repo.insert_event(&draft).await?;
    Ok(evento)
}

pub async fn update_event(state: &AppState, id: i64, draft: EventDraft) -> Result<Event, AppError> {
    let draft = validated(draft)?;
    let evento = state.event_repo.update_event(id, &draft).await?;
    Ok(evento)
}

pub async fn delete_event(state: &AppState, id: i64) -> Result<(), AppError> {
    state.event_repo.delete_event(id).await?;
    Ok(())
}

fn validated(mut draft: EventDraft) -> Result<EventDraft, AppError> {
    draft.nome = draft.nome.trim().to_string();
    if draft.nome.chars().count() < 3 {
        return Err(AppError::BadRequest(
            "nome must have at least 3 characters".to_string(),
        ));
    }
    if draft.nome.chars().any(|ch| ch.is_ascii_digit()) {
        return Err(AppError::BadRequest(
            "nome must not contain digits".to_string(),
        ));
    }
    if draft.descricao.trim().is_empty() {
        return Err(AppError::BadRequest("descricao is required".to_string()));
    }
    if draft.organizador.trim().is_empty() {
        return Err(AppError::BadRequest("organizador is required".to_string()));
    }
    if draft.local.trim().is_empty() {
        return Err(AppError::BadRequest("local is required".to_string()));
    }
    if parse_event_date(&draft.data).is_none() {
        return Err(AppError::BadRequest(
            "data must be a valid DD/MM/YYYY date".to_string(),
        ));
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EventDraft {
        EventDraft {
            nome: "Semana de IoT".to_string(),
            descricao: "Palestras e oficinas".to_string(),
            data: "25/12/2026".to_string(),
            local: "Auditório Central".to_string(),
            organizador: "Comissão".to_string(),
            imagem_url: None,
        }
    }

    #[test]
    fn accepts_well_formed_draft() {
        assert!(validated(draft()).is_ok());
    }

    #[test]
    fn rejects_short_or_numeric_names() {
        let mut d = draft();
        d.nome = "ab".to_string();
        assert!(matches!(validated(d), Err(AppError::BadRequest(_))));

        let mut d = draft();
        d.nome = "Evento 2026".to_string();
        assert!(matches!(validated(d), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_bad_dates() {
        let mut d = draft();
        d.data = "2026-12-25".to_string();
        assert!(matches!(validated(d), Err(AppError::BadRequest(_))));

        let mut d = draft();
        d.data = "31/02/2026".to_string();
        assert!(matches!(validated(d), Err(AppError::BadRequest(_))));
    }
}
