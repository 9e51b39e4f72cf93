//! PostgreSQL implementation of AthleteRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres};

use crate::domain::athlete::Athlete;
use crate::domain::foundation::{AthleteId, ClubId, DomainError, Timestamp};
use crate::ports::AthleteRepository;

use super::column;

pub(super) const ATHLETE_COLUMNS: &str = "id, club_id, athlete_code, first_name, last_name, dob, email, \
     phone, parent_name, parent_phone, home_address, description, created_at, updated_at";

const INSERT_ATHLETE: &str = r#"
    INSERT INTO athletes (
        id, club_id, athlete_code, first_name, last_name, dob, email, phone,
        parent_name, parent_phone, home_address, description, created_at, updated_at
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
"#;

#[derive(Clone)]
pub struct PostgresAthleteRepository {
    pool: PgPool,
}

impl PostgresAthleteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert statement shared with the enrollment transaction.
pub(super) fn insert_athlete(
    athlete: &Athlete,
) -> sqlx::query::Query<'_, Postgres, sqlx::postgres::PgArguments> {
    sqlx::query(INSERT_ATHLETE)
        .bind(athlete.id().as_uuid())
        .bind(athlete.club_id().as_uuid())
        .bind(athlete.athlete_code())
        .bind(athlete.first_name())
        .bind(athlete.last_name())
        .bind(athlete.dob())
        .bind(athlete.email())
        .bind(athlete.phone())
        .bind(athlete.parent_name())
        .bind(athlete.parent_phone())
        .bind(athlete.home_address())
        .bind(athlete.description())
        .bind(athlete.created_at().as_datetime())
        .bind(athlete.updated_at().as_datetime())
}

#[async_trait]
impl AthleteRepository for PostgresAthleteRepository {
    async fn save(&self, athlete: &Athlete) -> Result<(), DomainError> {
        insert_athlete(athlete)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("insert athlete", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &AthleteId) -> Result<Option<Athlete>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM athletes WHERE id = $1", ATHLETE_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch athlete", e))?;

        row.map(|r| row_to_athlete(&r)).transpose()
    }

    async fn find_by_ids(&self, ids: &[AthleteId]) -> Result<Vec<Athlete>, DomainError> {
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query(&format!("SELECT {} FROM athletes WHERE id = ANY($1)", ATHLETE_COLUMNS))
            .bind(uuids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch athletes", e))?;

        rows.iter().map(row_to_athlete).collect()
    }

    async fn find_by_code(&self, code: &str, club_id: &ClubId) -> Result<Option<Athlete>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM athletes WHERE athlete_code = $1 AND club_id = $2 \
             ORDER BY created_at LIMIT 1",
            ATHLETE_COLUMNS
        ))
        .bind(code)
        .bind(club_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch athlete by code", e))?;

        row.map(|r| row_to_athlete(&r)).transpose()
    }

    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Athlete>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM athletes WHERE club_id = $1 ORDER BY last_name, first_name",
            ATHLETE_COLUMNS
        ))
        .bind(club_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list athletes", e))?;

        rows.iter().map(row_to_athlete).collect()
    }
}

pub(super) fn row_to_athlete(row: &PgRow) -> Result<Athlete, DomainError> {
    Ok(Athlete::reconstitute(
        AthleteId::from_uuid(column(row, "id")?),
        ClubId::from_uuid(column(row, "club_id")?),
        column(row, "athlete_code")?,
        column(row, "first_name")?,
        column(row, "last_name")?,
        column(row, "dob")?,
        column(row, "email")?,
        column(row, "phone")?,
        column(row, "parent_name")?,
        column(row, "parent_phone")?,
        column(row, "home_address")?,
        column(row, "description")?,
        Timestamp::from_datetime(column(row, "created_at")?),
        Timestamp::from_datetime(column(row, "updated_at")?),
    ))
}
