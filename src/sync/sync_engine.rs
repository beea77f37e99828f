use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

use crate::attendance::{EventStore, ReportingWindow};
use crate::storage::config::Config;
use crate::sync::remote::{ApiError, AttendanceRemote, BasketClient};
use crate::sync::token::AccessToken;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("API error: {0}")]
    ApiError(#[from] ApiError),
    #[error("No access token configured")]
    MissingToken,
}

pub struct SyncManager {
    client: BasketClient,
    token: Option<AccessToken>,
    remote_unreachable: bool,
}

impl SyncManager {
    pub fn new(config: &Config) -> Self {
        let client = BasketClient::new().with_base_url(config.remote.endpoint.clone());
        Self {
            client,
            token: None,
            remote_unreachable: false,
        }
    }

    pub fn set_token(&mut self, token: AccessToken) {
        self.token = Some(token);
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub fn remote_unreachable(&self) -> bool {
        self.remote_unreachable
    }

    pub async fn load(
        &mut self,
        window: &ReportingWindow,
        store: &mut EventStore,
    ) -> Result<(), SyncError> {
        let Some(token) = &self.token else {
            return Ok(());
        };

        match self.client.fetch_events(token).await {
            Ok(events) => {
                let filtered = events
                    .into_iter()
                    .filter(|event| window.contains(event.date) && !is_weekend(event.date));
                store.replace_all(filtered);
                self.remote_unreachable = false;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Remote load failed, keeping local events: {}", err);
                self.remote_unreachable = true;
                Err(err.into())
            }
        }
    }

    pub async fn save(&mut self, store: &EventStore) -> Result<(), SyncError> {
        let token = self.token.as_ref().ok_or(SyncError::MissingToken)?;

        match self.client.push_events(token, &store.all()).await {
            Ok(()) => {
                self.remote_unreachable = false;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Remote save failed: {}", err);
                self.remote_unreachable = true;
                Err(err.into())
            }
        }
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
