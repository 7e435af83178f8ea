// Scan resolution outcome

use serde::{Deserialize, Serialize};

use crate::entities::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanFailure {
    /// Input did not match any recognized shape.
    UnsupportedFormat,
    /// A format's prefix matched but extraction failed.
    Malformed,
    NotFound,
    Timeout,
    StoreUnavailable,
}

impl ScanFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanFailure::UnsupportedFormat => "unsupported_format",
            ScanFailure::Malformed => "malformed",
            ScanFailure::NotFound => "not_found",
            ScanFailure::Timeout => "timeout",
            ScanFailure::StoreUnavailable => "store_unavailable",
        }
    }

    /// Operator-facing message shown by the scanner screen.
    pub fn message(&self) -> &'static str {
        match self {
            ScanFailure::UnsupportedFormat => "QR Code não reconhecido.",
            ScanFailure::Malformed => "QR Code inválido.",
            ScanFailure::NotFound => "Evento não encontrado.",
            ScanFailure::Timeout => "Tempo de consulta esgotado.",
            ScanFailure::StoreUnavailable => "Serviço indisponível.",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Resolution {
    Found(Event),
    Failed(ScanFailure),
}

impl Resolution {
    pub fn outcome_str(&self) -> &'static str {
        match self {
            Resolution::Found(_) => "found",
            Resolution::Failed(reason) => reason.as_str(),
        }
    }
}
