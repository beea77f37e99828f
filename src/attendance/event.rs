use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Office,
    Holiday,
    #[serde(rename = "wfh")]
    RemoteApproved,
    #[serde(rename = "ooo")]
    OutOfOffice,
}

impl DayStatus {
    pub fn parse(value: &str) -> Option<DayStatus> {
        match value {
            "office" => Some(DayStatus::Office),
            "holiday" => Some(DayStatus::Holiday),
            "wfh" => Some(DayStatus::RemoteApproved),
            "ooo" => Some(DayStatus::OutOfOffice),
            _ => None,
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayStatus::Office => "Office",
            DayStatus::Holiday => "Holiday",
            DayStatus::RemoteApproved => "Approved WFH",
            DayStatus::OutOfOffice => "OOO",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub status: Option<DayStatus>,
}

impl EventRecord {
    pub fn into_event(self) -> Option<Event> {
        self.status.map(|status| Event {
            date: self.date,
            status,
        })
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        Self {
            date: event.date,
            status: Some(event.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn status_serializes_to_wire_strings() {
        assert_eq!(serde_json::to_string(&DayStatus::Office).unwrap(), "\"office\"");
        assert_eq!(serde_json::to_string(&DayStatus::Holiday).unwrap(), "\"holiday\"");
        assert_eq!(serde_json::to_string(&DayStatus::RemoteApproved).unwrap(), "\"wfh\"");
        assert_eq!(serde_json::to_string(&DayStatus::OutOfOffice).unwrap(), "\"ooo\"");
    }

    #[test]
    fn record_serializes_date_and_type() {
        let record = EventRecord::from(Event {
            date: date(2024, 1, 2),
            status: DayStatus::RemoteApproved,
        });

        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"date":"2024-01-02","type":"wfh"}"#);
    }

    #[test]
    fn record_with_null_type_converts_to_no_event() {
        let record: EventRecord = serde_json::from_str(r#"{"date":"2024-01-02","type":null}"#).unwrap();

        assert_eq!(record.into_event(), None);
    }

    #[test]
    fn record_with_missing_type_converts_to_no_event() {
        let record: EventRecord = serde_json::from_str(r#"{"date":"2024-01-02"}"#).unwrap();

        assert_eq!(record.into_event(), None);
    }

    #[test]
    fn record_with_unknown_type_is_rejected() {
        let result = serde_json::from_str::<EventRecord>(r#"{"date":"2024-01-02","type":"vacation"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn parse_accepts_wire_strings() {
        assert_eq!(DayStatus::parse("office"), Some(DayStatus::Office));
        assert_eq!(DayStatus::parse("wfh"), Some(DayStatus::RemoteApproved));
        assert_eq!(DayStatus::parse("ooo"), Some(DayStatus::OutOfOffice));
        assert_eq!(DayStatus::parse("weekend"), None);
    }
}
