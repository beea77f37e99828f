use chrono::NaiveDate;

use crate::attendance::{
    AttendanceTotals, DayStatus, Event, EventStore, ReportingWindow, aggregate,
    remote_weeks_available,
};
use crate::storage::cache::Cache;
use crate::storage::config::Config;
use crate::sync::sync_engine::{SyncError, SyncManager};
use crate::sync::token::{AccessToken, TokenError};
use crate::sync::transfer::{self, TransferError};

pub struct Tracker {
    today: NaiveDate,
    window: ReportingWindow,
    store: EventStore,
    cache: Cache,
    sync: SyncManager,
}

impl Tracker {
    pub fn new(config: &Config, cache: Cache, today: NaiveDate) -> Self {
        let mut store = EventStore::new();
        match cache.load_events() {
            Ok(Some(events)) => store.replace_all(events),
            Ok(None) => {}
            Err(err) => tracing::warn!("Failed to read cached events: {}", err),
        }

        let mut sync = SyncManager::new(config);
        match cache.load_token() {
            Ok(Some(raw)) => match AccessToken::parse(&raw) {
                Ok(token) => sync.set_token(token),
                Err(err) => tracing::warn!("Ignoring cached access token: {}", err),
            },
            Ok(None) => {}
            Err(err) => tracing::warn!("Failed to read cached token: {}", err),
        }

        Self {
            today,
            window: ReportingWindow::containing(today),
            store,
            cache,
            sync,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn window(&self) -> &ReportingWindow {
        &self.window
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        if today != self.today {
            self.today = today;
            self.window = ReportingWindow::containing(today);
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.store.all()
    }

    pub fn on_date_selected(&self, date: NaiveDate) -> Option<DayStatus> {
        self.store.lookup(date)
    }

    pub fn on_status_chosen(&mut self, date: NaiveDate, status: Option<DayStatus>) {
        self.store.upsert(date, status);
        self.mirror_to_cache();
    }

    pub fn aggregates(&self) -> AttendanceTotals {
        aggregate(&self.store, &self.window)
    }

    pub fn prediction(&self) -> Option<f64> {
        remote_weeks_available(&self.store, &self.window, &self.aggregates())
    }

    pub fn has_access_token(&self) -> bool {
        self.sync.token().is_some()
    }

    pub fn set_access_token(&mut self, value: &str) -> Result<(), TokenError> {
        let token = AccessToken::parse(value)?;
        if let Err(err) = self.cache.save_token(token.as_str()) {
            tracing::warn!("Failed to persist access token: {}", err);
        }
        self.sync.set_token(token);
        Ok(())
    }

    pub fn remote_unreachable(&self) -> bool {
        self.sync.remote_unreachable()
    }

    pub async fn trigger_load(&mut self) -> Result<(), SyncError> {
        self.sync.load(&self.window, &mut self.store).await?;
        self.mirror_to_cache();
        Ok(())
    }

    pub async fn trigger_save(&mut self) -> Result<(), SyncError> {
        self.sync.save(&self.store).await
    }

    pub fn export_events(&self) -> String {
        transfer::export_events(&self.store)
    }

    pub fn import_events(&mut self, json: &str) -> Result<usize, TransferError> {
        let events = transfer::import_events(json)?;
        self.store.replace_all(events);
        self.mirror_to_cache();
        Ok(self.store.len())
    }

    fn mirror_to_cache(&self) {
        if let Err(err) = self.cache.save_events(&self.store.all()) {
            tracing::warn!("Failed to mirror events to local cache: {}", err);
        }
    }
}
