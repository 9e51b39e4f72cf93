//! PostgreSQL implementation of ClubRepository and TeacherRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::club::{Club, Teacher};
use crate::domain::foundation::{ClubId, DomainError, TeacherId};
use crate::ports::{ClubRepository, TeacherRepository};

use super::column;

/// PostgreSQL implementation of the club and teacher ports.
#[derive(Clone)]
pub struct PostgresClubRepository {
    pool: PgPool,
}

impl PostgresClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const CLUB_COLUMNS: &str = "id, name, web_name, location, contact_email, contact_phone, contact_person, description";
const TEACHER_COLUMNS: &str = "id, club_id, first_name, last_name, email, phone, biography";

#[async_trait]
impl ClubRepository for PostgresClubRepository {
    async fn save(&self, club: &Club) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO clubs (
                id, name, web_name, location, contact_email, contact_phone,
                contact_person, description
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(club.id().as_uuid())
        .bind(club.name())
        .bind(club.web_name())
        .bind(club.location())
        .bind(club.contact_email())
        .bind(club.contact_phone())
        .bind(club.contact_person())
        .bind(club.description())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert club", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM clubs WHERE id = $1", CLUB_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch club", e))?;

        row.map(|r| row_to_club(&r)).transpose()
    }

    async fn find_by_web_name(&self, web_name: &str) -> Result<Option<Club>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM clubs WHERE web_name = $1", CLUB_COLUMNS))
            .bind(web_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch club by web name", e))?;

        row.map(|r| row_to_club(&r)).transpose()
    }
}

#[async_trait]
impl TeacherRepository for PostgresClubRepository {
    async fn save(&self, teacher: &Teacher) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO teachers (id, club_id, first_name, last_name, email, phone, biography)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(teacher.id().as_uuid())
        .bind(teacher.club_id().as_uuid())
        .bind(teacher.first_name())
        .bind(teacher.last_name())
        .bind(teacher.email())
        .bind(teacher.phone())
        .bind(teacher.biography())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert teacher", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TeacherId) -> Result<Option<Teacher>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM teachers WHERE id = $1", TEACHER_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch teacher", e))?;

        row.map(|r| row_to_teacher(&r)).transpose()
    }

    async fn find_by_ids(&self, ids: &[TeacherId]) -> Result<Vec<Teacher>, DomainError> {
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query(&format!("SELECT {} FROM teachers WHERE id = ANY($1)", TEACHER_COLUMNS))
            .bind(uuids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch teachers", e))?;

        rows.iter().map(row_to_teacher).collect()
    }

    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Teacher>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM teachers WHERE club_id = $1 ORDER BY last_name, first_name",
            TEACHER_COLUMNS
        ))
        .bind(club_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list teachers", e))?;

        rows.iter().map(row_to_teacher).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════

fn row_to_club(row: &PgRow) -> Result<Club, DomainError> {
    Ok(Club::reconstitute(
        ClubId::from_uuid(column(row, "id")?),
        column(row, "name")?,
        column(row, "web_name")?,
        column(row, "location")?,
        column(row, "contact_email")?,
        column(row, "contact_phone")?,
        column(row, "contact_person")?,
        column(row, "description")?,
    ))
}

fn row_to_teacher(row: &PgRow) -> Result<Teacher, DomainError> {
    Ok(Teacher::reconstitute(
        TeacherId::from_uuid(column(row, "id")?),
        ClubId::from_uuid(column(row, "club_id")?),
        column(row, "first_name")?,
        column(row, "last_name")?,
        column(row, "email")?,
        column(row, "phone")?,
        column(row, "biography")?,
    ))
}
