//! Class offering repository port.

use crate::domain::class::ClassOffering;
use crate::domain::foundation::{ClassId, DomainError, SeasonId};
use async_trait::async_trait;

/// Repository port for ClassOffering persistence.
#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// Save a new class.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, class: &ClassOffering) -> Result<(), DomainError>;

    /// Update an existing class.
    ///
    /// # Errors
    ///
    /// - `ClassNotFound` if the class doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, class: &ClassOffering) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &ClassId) -> Result<Option<ClassOffering>, DomainError>;

    /// Classes with the given ids. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[ClassId]) -> Result<Vec<ClassOffering>, DomainError>;

    /// Classes of a season ordered by start date, then start time.
    async fn find_by_season(&self, season_id: &SeasonId) -> Result<Vec<ClassOffering>, DomainError>;

    /// A class only if it belongs to `season_id`.
    async fn find_in_season(
        &self,
        season_id: &SeasonId,
        class_id: &ClassId,
    ) -> Result<Option<ClassOffering>, DomainError>;
}
