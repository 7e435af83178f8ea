// Hosted record store adapter
// Speaks the PostgREST dialect: row filters in the query string, JSON array
// bodies, `Prefer: return=representation` to get written rows back.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use backend_domain::ports::{
    EventRepository, RegistrationRepository, ScanLogRepository, SpeakerRepository, StoreError,
    StoreResult,
};
use backend_domain::{
    Event, EventDraft, Registration, RegistrationDraft, ScanLogEntry, Speaker, SpeakerDraft,
    StoreConfig,
};

const EVENTS_TABLE: &str = "eventos";
const SPEAKERS_TABLE: &str = "palestrantes";
const REGISTRATIONS_TABLE: &str = "inscricoes";
const SCAN_LOGS_TABLE: &str = "scan_logs";

#[derive(Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestStore {
    pub fn new(config: &StoreConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.store_url.trim_end_matches('/').to_string(),
            api_key: config.store_api_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request
                .header("apikey", key)
                .bearer_auth(key),
            None => request,
        }
    }

    async fn select_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, &str)],
    ) -> StoreResult<Vec<T>> {
        let request = self
            .authorized(self.client.get(self.table_url(table)))
            .query(&[("select", "*")])
            .query(filters);
        let response = request.send().await.map_err(map_request_error)?;
        read_rows(response).await
    }

    async fn fetch_one<T: DeserializeOwned>(&self, table: &str, id: &str) -> StoreResult<T> {
        let filter = format!("eq.{}", id);
        let mut rows: Vec<T> = self.select_rows(table, &[("id", filter.as_str())]).await?;
        rows.pop().ok_or(StoreError::NotFound)
    }

    async fn insert_row<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
    ) -> StoreResult<T> {
        let request = self
            .authorized(self.client.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&[body]);
        let response = request.send().await.map_err(map_request_error)?;
        let mut rows: Vec<T> = read_rows(response).await?;
        rows.pop()
            .ok_or_else(|| StoreError::Unavailable("store returned no row".to_string()))
    }

    async fn update_row<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        id: i64,
        body: &B,
    ) -> StoreResult<T> {
        let filter = format!("eq.{}", id);
        let request = self
            .authorized(self.client.patch(self.table_url(table)))
            .query(&[("id", filter.as_str())])
            .header("Prefer", "return=representation")
            .json(body);
        let response = request.send().await.map_err(map_request_error)?;
        let mut rows: Vec<T> = read_rows(response).await?;
        // An update that matched nothing comes back as an empty set.
        rows.pop().ok_or(StoreError::NotFound)
    }

    async fn delete_row(&self, table: &str, id: i64) -> StoreResult<()> {
        let filter = format!("eq.{}", id);
        let request = self
            .authorized(self.client.delete(self.table_url(table)))
            .query(&[("id", filter.as_str())]);
        let response = request.send().await.map_err(map_request_error)?;
        check_status(&response)?;
        Ok(())
    }
}

fn map_request_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        StoreError::Timeout
    } else {
        StoreError::Unavailable(err.to_string())
    }
}

fn check_status(response: &Response) -> StoreResult<()> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(StoreError::NotFound);
    }
    if !status.is_success() {
        return Err(StoreError::Unavailable(format!(
            "store responded {}",
            status
        )));
    }
    Ok(())
}

async fn read_rows<T: DeserializeOwned>(response: Response) -> StoreResult<Vec<T>> {
    check_status(&response)?;
    response.json::<Vec<T>>().await.map_err(|err| {
        debug!("store row decode failed: {}", err);
        StoreError::Unavailable(format!("bad store payload: {}", err))
    })
}

#[async_trait]
impl EventRepository for RestStore {
    async fn list_events(&self) -> StoreResult<Vec<Event>> {
        self.select_rows(EVENTS_TABLE, &[("order", "created_at.desc")])
            .await
    }

    async fn find_event_by_id(&self, id: &str) -> StoreResult<Event> {
        self.fetch_one(EVENTS_TABLE, id).await
    }

    async fn insert_event(&self, draft: &EventDraft) -> StoreResult<Event> {
        self.insert_row(EVENTS_TABLE, draft).await
    }

    async fn update_event(&self, id: i64, draft: &EventDraft) -> StoreResult<Event> {
        self.update_row(EVENTS_TABLE, id, draft).await
    }

    async fn delete_event(&self, id: i64) -> StoreResult<()> {
        self.delete_row(EVENTS_TABLE, id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        let request = self
            .authorized(self.client.get(self.table_url(EVENTS_TABLE)))
            .query(&[("select", "id"), ("limit", "1")]);
        let response = request.send().await.map_err(map_request_error)?;
        check_status(&response)
    }
}

#[async_trait]
impl SpeakerRepository for RestStore {
    async fn list_speakers(&self) -> StoreResult<Vec<Speaker>> {
        self.select_rows(SPEAKERS_TABLE, &[]).await
    }

    async fn find_speaker_by_id(&self, id: i64) -> StoreResult<Speaker> {
        self.fetch_one(SPEAKERS_TABLE, &id.to_string()).await
    }

    async fn insert_speaker(&self, draft: &SpeakerDraft) -> StoreResult<Speaker> {
        self.insert_row(SPEAKERS_TABLE, draft).await
    }

    async fn update_speaker(&self, id: i64, draft: &SpeakerDraft) -> StoreResult<Speaker> {
        self.update_row(SPEAKERS_TABLE, id, draft).await
    }

    async fn delete_speaker(&self, id: i64) -> StoreResult<()> {
        self.delete_row(SPEAKERS_TABLE, id).await
    }
}

#[async_trait]
impl RegistrationRepository for RestStore {
    async fn list_registrations(&self) -> StoreResult<Vec<Registration>> {
        self.select_rows(REGISTRATIONS_TABLE, &[]).await
    }

    async fn insert_registration(&self, draft: &RegistrationDraft) -> StoreResult<Registration> {
        self.insert_row(REGISTRATIONS_TABLE, draft).await
    }

    async fn update_registration(
        &self,
        id: i64,
        draft: &RegistrationDraft,
    ) -> StoreResult<Registration> {
        self.update_row(REGISTRATIONS_TABLE, id, draft).await
    }

    async fn delete_registration(&self, id: i64) -> StoreResult<()> {
        self.delete_row(REGISTRATIONS_TABLE, id).await
    }
}

#[async_trait]
impl ScanLogRepository for RestStore {
    async fn insert_scan_log(&self, entry: &ScanLogEntry) -> StoreResult<()> {
        let request = self
            .authorized(self.client.post(self.table_url(SCAN_LOGS_TABLE)))
            .json(&[entry]);
        let response = request.send().await.map_err(map_request_error)?;
        check_status(&response)
    }
}
