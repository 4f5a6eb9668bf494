//! Track catalog operations for the repository.

use crate::domain::{TimeMs, Track, TrackId, TrackType, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::warn;

use super::{counter_from_row, Repository};

impl Repository {
    /// Insert a track idempotently.
    ///
    /// Returns false if a track with the same id already exists.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_track(&self, track: &Track) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO tracks (id, creator, track_type, lifetime_plays, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(track.id.as_str())
        .bind(track.creator.as_str())
        .bind(track.track_type.as_str())
        .bind(i64::try_from(track.lifetime_plays).unwrap_or(i64::MAX))
        .bind(track.created_at.map(|t| t.as_i64()))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Fetch a single track by id.
    pub async fn get_track(&self, id: &TrackId) -> Result<Option<Track>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, creator, track_type, lifetime_plays, created_at
            FROM tracks
            WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(track_from_row))
    }

    /// Fetch every track whose type is in `types`, in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn query_tracks_by_type(&self, types: &[TrackType]) -> Result<Vec<Track>, sqlx::Error> {
        if types.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; types.len()].join(", ");
        let sql = format!(
            r#"
            SELECT id, creator, track_type, lifetime_plays, created_at
            FROM tracks
            WHERE track_type IN ({})
            ORDER BY rowid ASC
            "#,
            placeholders
        );

        let mut query = sqlx::query(&sql);
        for track_type in types {
            query = query.bind(track_type.as_str());
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.iter().map(track_from_row).collect())
    }
}

fn track_from_row(row: &SqliteRow) -> Track {
    let id: String = row.get("id");
    let creator: String = row.get("creator");
    let track_type: String = row.get("track_type");
    let lifetime_plays: i64 = row.get("lifetime_plays");
    let created_at = row
        .try_get::<Option<i64>, _>("created_at")
        .unwrap_or_else(|e| {
            warn!(
                track = %id,
                error = %e,
                "Unreadable track created_at, treating as missing"
            );
            None
        });

    let lifetime_plays = counter_from_row(lifetime_plays, "lifetime_plays", &id);

    Track {
        id: TrackId::new(id),
        creator: UserId::new(creator),
        track_type: TrackType::new(&track_type),
        lifetime_plays,
        created_at: created_at.map(TimeMs::new),
    }
}
