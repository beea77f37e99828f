use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::attendance::{DayStatus, Event};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    days: BTreeMap<NaiveDate, DayStatus>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, date: NaiveDate, status: Option<DayStatus>) {
        match status {
            Some(status) => {
                self.days.insert(date, status);
            }
            None => {
                self.days.remove(&date);
            }
        }
    }

    pub fn lookup(&self, date: NaiveDate) -> Option<DayStatus> {
        self.days.get(&date).copied()
    }

    pub fn all(&self) -> Vec<Event> {
        self.days
            .iter()
            .map(|(&date, &status)| Event { date, status })
            .collect()
    }

    pub fn replace_all(&mut self, events: impl IntoIterator<Item = Event>) {
        // Later duplicates overwrite earlier ones during collection.
        self.days = events
            .into_iter()
            .map(|event| (event.date, event.status))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn upserts_on_distinct_dates_are_independent() {
        let mut store = EventStore::new();

        store.upsert(date(2024, 1, 1), Some(DayStatus::Office));
        store.upsert(date(2024, 1, 2), Some(DayStatus::Holiday));

        assert_eq!(store.lookup(date(2024, 1, 1)), Some(DayStatus::Office));
        assert_eq!(store.lookup(date(2024, 1, 2)), Some(DayStatus::Holiday));
    }

    #[test]
    fn second_upsert_for_same_date_wins() {
        let mut store = EventStore::new();

        store.upsert(date(2024, 1, 1), Some(DayStatus::Office));
        store.upsert(date(2024, 1, 1), Some(DayStatus::RemoteApproved));

        assert_eq!(store.lookup(date(2024, 1, 1)), Some(DayStatus::RemoteApproved));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn upsert_with_none_removes_entry() {
        let mut store = EventStore::new();
        store.upsert(date(2024, 1, 1), Some(DayStatus::Office));

        store.upsert(date(2024, 1, 1), None);

        assert_eq!(store.lookup(date(2024, 1, 1)), None);
        assert!(store.is_empty());
    }

    #[test]
    fn lookup_of_absent_date_returns_none() {
        let store = EventStore::new();

        assert_eq!(store.lookup(date(2024, 1, 1)), None);
    }

    #[test]
    fn all_returns_events_sorted_ascending() {
        let mut store = EventStore::new();
        store.upsert(date(2024, 3, 1), Some(DayStatus::Office));
        store.upsert(date(2024, 1, 1), Some(DayStatus::Holiday));
        store.upsert(date(2024, 2, 1), Some(DayStatus::OutOfOffice));

        let events = store.all();

        let dates: Vec<NaiveDate> = events.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1)]);
    }

    #[test]
    fn replace_all_keeps_last_duplicate_and_sorts() {
        let mut store = EventStore::new();
        store.upsert(date(2024, 5, 5), Some(DayStatus::Office));

        store.replace_all(vec![
            Event { date: date(2024, 1, 2), status: DayStatus::Office },
            Event { date: date(2024, 1, 1), status: DayStatus::Holiday },
            Event { date: date(2024, 1, 2), status: DayStatus::RemoteApproved },
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup(date(2024, 1, 2)), Some(DayStatus::RemoteApproved));
        assert_eq!(store.lookup(date(2024, 5, 5)), None);

        let dates: Vec<NaiveDate> = store.all().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 2)]);
    }
}
