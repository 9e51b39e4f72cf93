//! PostgreSQL implementation of SeasonRepository.
//!
//! The partial unique index `idx_seasons_one_active` backs the single
//! active season rule; `activate` and `save_active` flip flags inside one
//! transaction.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{ClubId, DomainError, ErrorCode, SeasonId, Timestamp};
use crate::domain::season::Season;
use crate::ports::SeasonRepository;

use super::column;

const SEASON_COLUMNS: &str = "id, club_id, start_date, end_date, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresSeasonRepository {
    pool: PgPool,
}

impl PostgresSeasonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeasonRepository for PostgresSeasonRepository {
    async fn save(&self, season: &Season) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO seasons (id, club_id, start_date, end_date, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(season.id().as_uuid())
        .bind(season.club_id().as_uuid())
        .bind(season.start_date())
        .bind(season.end_date())
        .bind(season.is_active())
        .bind(season.created_at().as_datetime())
        .bind(season.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert season", e))?;

        Ok(())
    }

    async fn save_active(&self, season: &Season) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        sqlx::query(
            r#"
            UPDATE seasons SET is_active = FALSE, updated_at = $2
            WHERE club_id = $1 AND is_active
            "#,
        )
        .bind(season.club_id().as_uuid())
        .bind(season.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("deactivate seasons", e))?;

        sqlx::query(
            r#"
            INSERT INTO seasons (id, club_id, start_date, end_date, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, TRUE, $5, $6)
            "#,
        )
        .bind(season.id().as_uuid())
        .bind(season.club_id().as_uuid())
        .bind(season.start_date())
        .bind(season.end_date())
        .bind(season.created_at().as_datetime())
        .bind(season.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("insert season", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit transaction", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SeasonId) -> Result<Option<Season>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM seasons WHERE id = $1", SEASON_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch season", e))?;

        row.map(|r| row_to_season(&r)).transpose()
    }

    async fn find_active(&self, club_id: &ClubId) -> Result<Option<Season>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM seasons WHERE club_id = $1 AND is_active \
             ORDER BY start_date DESC, id DESC LIMIT 1",
            SEASON_COLUMNS
        ))
        .bind(club_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch active season", e))?;

        row.map(|r| row_to_season(&r)).transpose()
    }

    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Season>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM seasons WHERE club_id = $1 ORDER BY start_date DESC",
            SEASON_COLUMNS
        ))
        .bind(club_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list seasons", e))?;

        rows.iter().map(row_to_season).collect()
    }

    async fn activate(&self, club_id: &ClubId, season_id: &SeasonId) -> Result<(), DomainError> {
        let now = Timestamp::now();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        // Deactivate first so the partial unique index never sees two actives
        sqlx::query(
            r#"
            UPDATE seasons SET is_active = FALSE, updated_at = $3
            WHERE club_id = $1 AND is_active AND id <> $2
            "#,
        )
        .bind(club_id.as_uuid())
        .bind(season_id.as_uuid())
        .bind(now.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("deactivate seasons", e))?;

        let result = sqlx::query(
            r#"
            UPDATE seasons SET is_active = TRUE, updated_at = $3
            WHERE club_id = $1 AND id = $2
            "#,
        )
        .bind(club_id.as_uuid())
        .bind(season_id.as_uuid())
        .bind(now.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("activate season", e))?;

        if result.rows_affected() == 0 {
            // Dropping `tx` rolls back the deactivation
            return Err(DomainError::new(
                ErrorCode::SeasonNotFound,
                format!("Season not found: {}", season_id),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit transaction", e))?;

        Ok(())
    }
}

fn row_to_season(row: &PgRow) -> Result<Season, DomainError> {
    Ok(Season::reconstitute(
        SeasonId::from_uuid(column(row, "id")?),
        ClubId::from_uuid(column(row, "club_id")?),
        column(row, "start_date")?,
        column(row, "end_date")?,
        column(row, "is_active")?,
        Timestamp::from_datetime(column(row, "created_at")?),
        Timestamp::from_datetime(column(row, "updated_at")?),
    ))
}
