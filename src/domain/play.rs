//! Play-history log entries and their monthly summaries.

use crate::domain::{TimeMs, TrackId, UserId, YearMonth, YearMonthError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One recorded playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    pub event_id: Uuid,
    pub track_id: TrackId,
    /// Listener, when the play was not anonymous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener: Option<UserId>,
    /// Originating network address, used as the unique-listener proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    pub time_ms: TimeMs,
    /// UTC year of `time_ms`, stored for monthly grouping.
    pub year: i32,
    /// UTC month (1-12) of `time_ms`, stored for monthly grouping.
    pub month: u32,
}

impl PlayEvent {
    /// Create a new PlayEvent with a fresh id and derived year/month.
    pub fn new(
        track_id: TrackId,
        listener: Option<UserId>,
        ip_address: Option<String>,
        time_ms: TimeMs,
    ) -> Result<Self, YearMonthError> {
        let period = YearMonth::containing(time_ms)?;
        let ip_address = ip_address
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(Self {
            event_id: Uuid::new_v4(),
            track_id,
            listener,
            ip_address,
            time_ms,
            year: period.year(),
            month: period.month(),
        })
    }

    pub fn in_period(&self, period: YearMonth) -> bool {
        self.year == period.year() && self.month == period.month()
    }
}

/// Per-track play summary for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub play_count: u64,
    pub unique_listeners: u64,
}

/// Monthly stats keyed by track. Tracks without plays are absent.
pub type MonthlyAggregates = HashMap<TrackId, MonthlyStats>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_event_derives_period() {
        // 2024-03-15T12:00:00Z
        let event = PlayEvent::new(
            TrackId::new("t1".to_string()),
            None,
            Some(" 10.0.0.1 ".to_string()),
            TimeMs::new(1_710_504_000_000),
        )
        .unwrap();

        assert_eq!(event.year, 2024);
        assert_eq!(event.month, 3);
        assert_eq!(event.ip_address.as_deref(), Some("10.0.0.1"));
        assert!(event.in_period(YearMonth::new(2024, 3).unwrap()));
        assert!(!event.in_period(YearMonth::new(2024, 4).unwrap()));
    }

    #[test]
    fn test_blank_ip_address_is_dropped() {
        let event = PlayEvent::new(
            TrackId::new("t1".to_string()),
            Some(UserId::new("u1".to_string())),
            Some("   ".to_string()),
            TimeMs::new(0),
        )
        .unwrap();
        assert!(event.ip_address.is_none());
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = PlayEvent::new(TrackId::new("t".to_string()), None, None, TimeMs::new(0)).unwrap();
        let b = PlayEvent::new(TrackId::new("t".to_string()), None, None, TimeMs::new(0)).unwrap();
        assert_ne!(a.event_id, b.event_id);
    }
}
