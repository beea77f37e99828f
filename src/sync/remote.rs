use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attendance::{Event, EventRecord};
use crate::sync::token::AccessToken;

pub const DEFAULT_ENDPOINT: &str = "https://getpantry.cloud/apiv1/pantry";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("No attendance basket for this token")]
    NotFound,
}

#[derive(Debug, Serialize, Deserialize)]
struct BasketPayload {
    data: Vec<EventRecord>,
}

#[async_trait]
pub trait AttendanceRemote {
    async fn fetch_events(&self, token: &AccessToken) -> Result<Vec<Event>, ApiError>;

    async fn push_events(&self, token: &AccessToken, events: &[Event]) -> Result<(), ApiError>;
}

pub struct BasketClient {
    base_url: String,
    client: reqwest::Client,
}

impl BasketClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn basket_url(&self, token: &AccessToken) -> String {
        format!("{}/{}/basket/attendance", self.base_url, token.as_str())
    }
}

impl Default for BasketClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttendanceRemote for BasketClient {
    async fn fetch_events(&self, token: &AccessToken) -> Result<Vec<Event>, ApiError> {
        let url = self.basket_url(token);

        tracing::info!("Fetching attendance basket");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::info!("Fetch basket response status: {}", status);

        if status == 404 {
            tracing::error!("Attendance basket not found");
            return Err(ApiError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Failed to fetch basket. Status: {}, Body: {}", status, body);
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        let payload: BasketPayload = response.json().await?;

        let events: Vec<Event> = payload
            .data
            .into_iter()
            .filter_map(EventRecord::into_event)
            .collect();

        tracing::info!("Fetched {} attendance events", events.len());
        Ok(events)
    }

    async fn push_events(&self, token: &AccessToken, events: &[Event]) -> Result<(), ApiError> {
        let url = self.basket_url(token);
        let payload = BasketPayload {
            data: events.iter().copied().map(EventRecord::from).collect(),
        };

        tracing::info!("Pushing {} attendance events", events.len());

        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        tracing::info!("Push basket response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Failed to push basket. Status: {}, Body: {}", status, body);
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        Ok(())
    }
}
