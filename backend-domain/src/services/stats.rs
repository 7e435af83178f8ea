// Dashboard aggregation over store snapshots

use std::collections::HashMap;

use chrono::Datelike;

use crate::entities::{
    DashboardStats, EspecialidadeContagem, Event, EventoInscricoes, Registration, Speaker,
};
use crate::utils::parse_event_date;

const UNDEFINED_SPECIALTY: &str = "Não definida";

pub fn build_stats(
    eventos: &[Event],
    palestrantes: &[Speaker],
    inscricoes: &[Registration],
) -> DashboardStats {
    DashboardStats {
        eventos: eventos.len(),
        palestrantes: palestrantes.len(),
        inscricoes: inscricoes.len(),
        eventos_por_mes: events_per_month(eventos),
        inscricoes_por_evento: registrations_per_event(eventos, inscricoes),
        palestrantes_por_especialidade: speakers_per_specialty(palestrantes),
    }
}

/// Twelve buckets, January first. Events whose `data` does not parse as
/// DD/MM/YYYY are skipped.
fn events_per_month(eventos: &[Event]) -> Vec<u32> {
    let mut meses = vec![0u32; 12];
    for evento in eventos {
        if let Some(date) = parse_event_date(&evento.data) {
            meses[date.month0() as usize] += 1;
        }
    }
    meses
}

fn registrations_per_event(eventos: &[Event], inscricoes: &[Registration]) -> Vec<EventoInscricoes> {
    eventos
        .iter()
        .map(|evento| EventoInscricoes {
            evento_id: evento.id,
            nome: evento.nome.clone(),
            total: inscricoes
                .iter()
                .filter(|inscricao| inscricao.evento_id == evento.id)
                .count(),
        })
        .collect()
}

fn speakers_per_specialty(palestrantes: &[Speaker]) -> Vec<EspecialidadeContagem> {
    let mut contagem: HashMap<String, usize> = HashMap::new();
    for palestrante in palestrantes {
        let especialidade = palestrante.especialidade.trim();
        let key = if especialidade.is_empty() {
            UNDEFINED_SPECIALTY.to_string()
        } else {
            especialidade.to_string()
        };
        *contagem.entry(key).or_default() += 1;
    }
    let mut grupos: Vec<EspecialidadeContagem> = contagem
        .into_iter()
        .map(|(especialidade, total)| EspecialidadeContagem {
            especialidade,
            total,
        })
        .collect();
    grupos.sort_by(|a, b| b.total.cmp(&a.total).then(a.especialidade.cmp(&b.especialidade)));
    grupos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evento(id: i64, nome: &str, data: &str) -> Event {
        Event {
            id,
            nome: nome.to_string(),
            descricao: String::new(),
            data: data.to_string(),
            local: String::new(),
            organizador: String::new(),
            imagem_url: None,
            created_at: None,
        }
    }

    fn inscricao(evento_id: i64) -> Registration {
        Registration {
            id: 0,
            nome_completo: String::new(),
            cpf: String::new(),
            email: String::new(),
            telefone: String::new(),
            evento_id,
        }
    }

    fn palestrante(especialidade: &str) -> Speaker {
        Speaker {
            id: 0,
            nome: String::new(),
            especialidade: especialidade.to_string(),
            email: String::new(),
            biografia: String::new(),
            telefone: String::new(),
        }
    }

    #[test]
    fn buckets_events_by_month_and_skips_bad_dates() {
        let eventos = vec![
            evento(1, "a", "05/01/2026"),
            evento(2, "b", "20/01/2026"),
            evento(3, "c", "10/12/2026"),
            evento(4, "d", "not-a-date"),
            evento(5, "e", "31/02/2026"),
        ];
        let meses = events_per_month(&eventos);
        assert_eq!(meses[0], 2);
        assert_eq!(meses[11], 1);
        assert_eq!(meses.iter().sum::<u32>(), 3);
    }

    #[test]
    fn counts_registrations_per_event() {
        let eventos = vec![evento(1, "a", "01/01/2026"), evento(2, "b", "01/01/2026")];
        let inscricoes = vec![inscricao(1), inscricao(1), inscricao(9)];
        let contagens = registrations_per_event(&eventos, &inscricoes);
        assert_eq!(contagens[0].total, 2);
        assert_eq!(contagens[1].total, 0);
    }

    #[test]
    fn groups_speakers_with_empty_specialty_as_undefined() {
        let palestrantes = vec![
            palestrante("IoT"),
            palestrante("IoT"),
            palestrante("  "),
        ];
        let grupos = speakers_per_specialty(&palestrantes);
        assert_eq!(grupos[0].especialidade, "IoT");
        assert_eq!(grupos[0].total, 2);
        assert!(grupos
            .iter()
            .any(|g| g.especialidade == UNDEFINED_SPECIALTY && g.total == 1));
    }
}
