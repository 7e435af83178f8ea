use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{
    Event, EventDraft, Registration, RegistrationDraft, ScanLogEntry, Speaker, SpeakerDraft,
};

/// Failures reported by the hosted record store. A missing row is kept
/// distinct from transport trouble so the scan path can tell an operator
/// "no such event" apart from "the venue link is down".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("record store timed out")]
    Timeout,
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list_events(&self) -> StoreResult<Vec<Event>>;
    /// Lookup by the identifier token extracted from a scan. A non-numeric
    /// token is the store's concern and comes back as `NotFound` or
    /// `Unavailable`.
    async fn find_event_by_id(&self, id: &str) -> StoreResult<Event>;
    async fn insert_event(&self, draft: &EventDraft) -> StoreResult<Event>;
    async fn update_event(&self, id: i64, draft: &EventDraft) -> StoreResult<Event>;
    async fn delete_event(&self, id: i64) -> StoreResult<()>;
    async fn ping(&self) -> StoreResult<()>;
}

#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    async fn list_speakers(&self) -> StoreResult<Vec<Speaker>>;
    async fn find_speaker_by_id(&self, id: i64) -> StoreResult<Speaker>;
    async fn insert_speaker(&self, draft: &SpeakerDraft) -> StoreResult<Speaker>;
    async fn update_speaker(&self, id: i64, draft: &SpeakerDraft) -> StoreResult<Speaker>;
    async fn delete_speaker(&self, id: i64) -> StoreResult<()>;
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn list_registrations(&self) -> StoreResult<Vec<Registration>>;
    async fn insert_registration(&self, draft: &RegistrationDraft) -> StoreResult<Registration>;
    async fn update_registration(
        &self,
        id: i64,
        draft: &RegistrationDraft,
    ) -> StoreResult<Registration>;
    async fn delete_registration(&self, id: i64) -> StoreResult<()>;
}

#[async_trait]
pub trait ScanLogRepository: Send + Sync {
    async fn insert_scan_log(&self, entry: &ScanLogEntry) -> StoreResult<()>;
}
