//! Monthly play aggregation over an in-memory event log.

use crate::domain::{MonthlyAggregates, MonthlyStats, PlayEvent, TrackId, YearMonth};
use std::collections::{HashMap, HashSet};

/// Reduce play events to one summary per track for `period`.
///
/// Only the stored year/month of each event is consulted. Unique listeners
/// are counted by distinct network address; events without an address count
/// as plays but not as listeners.
pub fn aggregate_monthly<'a, I>(events: I, period: YearMonth) -> MonthlyAggregates
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let mut plays: HashMap<&TrackId, u64> = HashMap::new();
    let mut addresses: HashMap<&TrackId, HashSet<&str>> = HashMap::new();

    for event in events.into_iter().filter(|e| e.in_period(period)) {
        *plays.entry(&event.track_id).or_default() += 1;
        let seen = addresses.entry(&event.track_id).or_default();
        if let Some(ip) = event.ip_address.as_deref() {
            seen.insert(ip);
        }
    }

    plays
        .into_iter()
        .map(|(track_id, play_count)| {
            let unique_listeners = addresses
                .get(track_id)
                .map(|s| s.len() as u64)
                .unwrap_or(0);
            (
                track_id.clone(),
                MonthlyStats {
                    play_count,
                    unique_listeners,
                },
            )
        })
        .collect()
}
