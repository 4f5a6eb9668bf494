//! Play-history operations for the repository.

use crate::domain::{MonthlyAggregates, MonthlyStats, PlayEvent, TrackId, YearMonth};
use sqlx::Row;

use super::{counter_from_row, Repository};

impl Repository {
    /// Append a play event and bump the track's lifetime counter atomically.
    ///
    /// Returns false (and writes nothing) if the track does not exist.
    ///
    /// # Errors
    /// Returns an error if the transaction fails.
    pub async fn record_play(&self, event: &PlayEvent) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE tracks SET lifetime_plays = lifetime_plays + 1
            WHERE id = ?
            "#,
        )
        .bind(event.track_id.as_str())
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            r#"
            INSERT INTO play_events (event_id, track_id, listener, ip_address, time_ms, year, month)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(event.event_id.to_string())
        .bind(event.track_id.as_str())
        .bind(event.listener.as_ref().map(|l| l.as_str()))
        .bind(event.ip_address.as_deref())
        .bind(event.time_ms.as_i64())
        .bind(i64::from(event.year))
        .bind(i64::from(event.month))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Play count and distinct-address count per track for `period`.
    ///
    /// Filters on the stored year/month columns. Tracks without plays are absent.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn query_monthly_aggregates(
        &self,
        period: YearMonth,
    ) -> Result<MonthlyAggregates, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT track_id,
                   COUNT(*) AS play_count,
                   COUNT(DISTINCT ip_address) AS unique_listeners
            FROM play_events
            WHERE year = ? AND month = ?
            GROUP BY track_id
            "#,
        )
        .bind(i64::from(period.year()))
        .bind(i64::from(period.month()))
        .fetch_all(&self.pool)
        .await?;

        let aggregates = rows
            .iter()
            .map(|row| {
                let track_id: String = row.get("track_id");
                let play_count: i64 = row.get("play_count");
                let unique_listeners: i64 = row.get("unique_listeners");

                let stats = MonthlyStats {
                    play_count: counter_from_row(play_count, "play_count", &track_id),
                    unique_listeners: counter_from_row(
                        unique_listeners,
                        "unique_listeners",
                        &track_id,
                    ),
                };
                (TrackId::new(track_id), stats)
            })
            .collect();

        Ok(aggregates)
    }

    /// Monthly stats for one track. Zero when it had no plays in `period`.
    pub async fn query_track_monthly_stats(
        &self,
        track_id: &TrackId,
        period: YearMonth,
    ) -> Result<MonthlyStats, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS play_count,
                   COUNT(DISTINCT ip_address) AS unique_listeners
            FROM play_events
            WHERE track_id = ? AND year = ? AND month = ?
            "#,
        )
        .bind(track_id.as_str())
        .bind(i64::from(period.year()))
        .bind(i64::from(period.month()))
        .fetch_one(&self.pool)
        .await?;

        let play_count: i64 = row.get("play_count");
        let unique_listeners: i64 = row.get("unique_listeners");

        Ok(MonthlyStats {
            play_count: counter_from_row(play_count, "play_count", track_id.as_str()),
            unique_listeners: counter_from_row(
                unique_listeners,
                "unique_listeners",
                track_id.as_str(),
            ),
        })
    }
}
