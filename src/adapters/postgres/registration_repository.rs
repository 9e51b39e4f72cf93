//! PostgreSQL implementation of RegistrationRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::athlete::Athlete;
use crate::domain::foundation::{AthleteId, ClassId, DomainError, ErrorCode, RegistrationId, Timestamp};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::ports::RegistrationRepository;

use super::athlete_repository::insert_athlete;
use super::column;

const REGISTRATION_COLUMNS: &str =
    "id, athlete_id, class_id, status, description, created_at, updated_at";

const INSERT_REGISTRATION: &str = r#"
    INSERT INTO registrations (id, athlete_id, class_id, status, description, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
"#;

#[derive(Clone)]
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list_where(
        &self,
        filter_column: &str,
        id: &uuid::Uuid,
    ) -> Result<Vec<Registration>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM registrations WHERE {} = $1 ORDER BY created_at DESC",
            REGISTRATION_COLUMNS, filter_column
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list registrations", e))?;

        rows.iter().map(row_to_registration).collect()
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn save(&self, registration: &Registration) -> Result<(), DomainError> {
        sqlx::query(INSERT_REGISTRATION)
            .bind(registration.id().as_uuid())
            .bind(registration.athlete_id().as_uuid())
            .bind(registration.class_id().as_uuid())
            .bind(registration.status().as_str())
            .bind(registration.description())
            .bind(registration.created_at().as_datetime())
            .bind(registration.updated_at().as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("insert registration", e))?;

        Ok(())
    }

    async fn enroll_new_athlete(
        &self,
        athlete: &Athlete,
        registration: &Registration,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        insert_athlete(athlete)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("insert athlete", e))?;

        sqlx::query(INSERT_REGISTRATION)
            .bind(registration.id().as_uuid())
            .bind(registration.athlete_id().as_uuid())
            .bind(registration.class_id().as_uuid())
            .bind(registration.status().as_str())
            .bind(registration.description())
            .bind(registration.created_at().as_datetime())
            .bind(registration.updated_at().as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("insert registration", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit transaction", e))?;

        Ok(())
    }

    async fn update(&self, registration: &Registration) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE registrations SET status = $2, description = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(registration.id().as_uuid())
        .bind(registration.status().as_str())
        .bind(registration.description())
        .bind(registration.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update registration", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RegistrationNotFound,
                format!("Registration not found: {}", registration.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM registrations WHERE id = $1",
            REGISTRATION_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch registration", e))?;

        row.map(|r| row_to_registration(&r)).transpose()
    }

    async fn list_by_athlete(&self, athlete_id: &AthleteId) -> Result<Vec<Registration>, DomainError> {
        self.list_where("athlete_id", athlete_id.as_uuid()).await
    }

    async fn list_by_class(&self, class_id: &ClassId) -> Result<Vec<Registration>, DomainError> {
        self.list_where("class_id", class_id.as_uuid()).await
    }
}

fn row_to_registration(row: &PgRow) -> Result<Registration, DomainError> {
    let status: String = column(row, "status")?;
    let status: RegistrationStatus = status
        .parse()
        .map_err(|e| DomainError::database("decode status", e))?;

    Ok(Registration::reconstitute(
        RegistrationId::from_uuid(column(row, "id")?),
        AthleteId::from_uuid(column(row, "athlete_id")?),
        ClassId::from_uuid(column(row, "class_id")?),
        status,
        column(row, "description")?,
        Timestamp::from_datetime(column(row, "created_at")?),
        Timestamp::from_datetime(column(row, "updated_at")?),
    ))
}
