//! PostgreSQL implementation of ClassRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::class::{ClassDetails, ClassOffering};
use crate::domain::foundation::{
    ClassId, DomainError, ErrorCode, SeasonId, TeacherId, Timestamp, WeekdaySet,
};
use crate::ports::ClassRepository;

use super::column;

const CLASS_COLUMNS: &str = "id, season_id, name, start_date, end_date, start_time, end_time, \
     days_of_week, teacher_id, place, price, registration_fee, description, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresClassRepository {
    pool: PgPool,
}

impl PostgresClassRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for PostgresClassRepository {
    async fn save(&self, class: &ClassOffering) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO classes (
                id, season_id, name, start_date, end_date, start_time, end_time,
                days_of_week, teacher_id, place, price, registration_fee, description,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(class.id().as_uuid())
        .bind(class.season_id().as_uuid())
        .bind(class.name())
        .bind(class.start_date())
        .bind(class.end_date())
        .bind(class.start_time())
        .bind(class.end_time())
        .bind(class.days().codes())
        .bind(class.teacher_id().map(|t| *t.as_uuid()))
        .bind(class.place())
        .bind(class.price())
        .bind(class.registration_fee())
        .bind(class.description())
        .bind(class.created_at().as_datetime())
        .bind(class.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert class", e))?;

        Ok(())
    }

    async fn update(&self, class: &ClassOffering) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE classes SET
                season_id = $2,
                name = $3,
                start_date = $4,
                end_date = $5,
                start_time = $6,
                end_time = $7,
                days_of_week = $8,
                teacher_id = $9,
                place = $10,
                price = $11,
                registration_fee = $12,
                description = $13,
                updated_at = $14
            WHERE id = $1
            "#,
        )
        .bind(class.id().as_uuid())
        .bind(class.season_id().as_uuid())
        .bind(class.name())
        .bind(class.start_date())
        .bind(class.end_date())
        .bind(class.start_time())
        .bind(class.end_time())
        .bind(class.days().codes())
        .bind(class.teacher_id().map(|t| *t.as_uuid()))
        .bind(class.place())
        .bind(class.price())
        .bind(class.registration_fee())
        .bind(class.description())
        .bind(class.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update class", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ClassNotFound,
                format!("Class not found: {}", class.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ClassId) -> Result<Option<ClassOffering>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM classes WHERE id = $1", CLASS_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch class", e))?;

        row.map(|r| row_to_class(&r)).transpose()
    }

    async fn find_by_ids(&self, ids: &[ClassId]) -> Result<Vec<ClassOffering>, DomainError> {
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query(&format!("SELECT {} FROM classes WHERE id = ANY($1)", CLASS_COLUMNS))
            .bind(uuids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch classes", e))?;

        rows.iter().map(row_to_class).collect()
    }

    async fn find_by_season(&self, season_id: &SeasonId) -> Result<Vec<ClassOffering>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM classes WHERE season_id = $1 ORDER BY start_date, start_time, id",
            CLASS_COLUMNS
        ))
        .bind(season_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch season classes", e))?;

        rows.iter().map(row_to_class).collect()
    }

    async fn find_in_season(
        &self,
        season_id: &SeasonId,
        class_id: &ClassId,
    ) -> Result<Option<ClassOffering>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM classes WHERE id = $1 AND season_id = $2",
            CLASS_COLUMNS
        ))
        .bind(class_id.as_uuid())
        .bind(season_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch class in season", e))?;

        row.map(|r| row_to_class(&r)).transpose()
    }
}

fn row_to_class(row: &PgRow) -> Result<ClassOffering, DomainError> {
    let codes: Vec<String> = column(row, "days_of_week")?;
    let days = WeekdaySet::parse_codes(&codes)
        .map_err(|e| DomainError::database("decode days_of_week", e))?;
    let teacher_id: Option<uuid::Uuid> = column(row, "teacher_id")?;

    let details = ClassDetails {
        name: column(row, "name")?,
        start_date: column(row, "start_date")?,
        end_date: column(row, "end_date")?,
        start_time: column(row, "start_time")?,
        end_time: column(row, "end_time")?,
        days,
        teacher_id: teacher_id.map(TeacherId::from_uuid),
        place: column(row, "place")?,
        price: column(row, "price")?,
        registration_fee: column(row, "registration_fee")?,
        description: column(row, "description")?,
    };

    Ok(ClassOffering::reconstitute(
        ClassId::from_uuid(column(row, "id")?),
        SeasonId::from_uuid(column(row, "season_id")?),
        details,
        Timestamp::from_datetime(column(row, "created_at")?),
        Timestamp::from_datetime(column(row, "updated_at")?),
    ))
}
