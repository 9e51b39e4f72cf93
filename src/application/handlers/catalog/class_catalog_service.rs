//! ClassCatalogService - resolves the active season and its class summaries.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::class::ClassOffering;
use crate::domain::club::{Club, ClubError, Teacher};
use crate::domain::foundation::TeacherId;
use crate::domain::schedule::{ClassCatalog, ClassSummary};
use crate::domain::season::Season;
use crate::ports::{ClassRepository, SeasonRepository, TeacherRepository};

/// Classes offered in a club's active season.
#[derive(Debug, Clone, Default)]
pub struct CurrentClasses {
    /// `None` when the club has no active season.
    pub season: Option<Season>,
    pub catalog: ClassCatalog,
}

/// Season resolver and class catalog, shared by the catalog, schedule and
/// registration handlers.
#[derive(Clone)]
pub struct ClassCatalogService {
    seasons: Arc<dyn SeasonRepository>,
    classes: Arc<dyn ClassRepository>,
    teachers: Arc<dyn TeacherRepository>,
}

impl ClassCatalogService {
    pub fn new(
        seasons: Arc<dyn SeasonRepository>,
        classes: Arc<dyn ClassRepository>,
        teachers: Arc<dyn TeacherRepository>,
    ) -> Self {
        Self {
            seasons,
            classes,
            teachers,
        }
    }

    /// The club's active season. Absence is not an error.
    pub async fn active_season(&self, club: &Club) -> Result<Option<Season>, ClubError> {
        Ok(self.seasons.find_active(club.id()).await?)
    }

    /// Summaries of every class in the active season, keyed by class id.
    /// Empty when the club has no active season.
    pub async fn classes_for_current_season(&self, club: &Club) -> Result<CurrentClasses, ClubError> {
        let Some(season) = self.active_season(club).await? else {
            tracing::debug!(club = %club.web_name(), "no active season");
            return Ok(CurrentClasses::default());
        };

        let classes = self.classes.find_by_season(season.id()).await?;
        let teachers = self.teachers_of(&classes).await?;

        let catalog = classes
            .iter()
            .map(|class| {
                let teacher = class.teacher_id().and_then(|id| teachers.get(id));
                ClassSummary::from_offering(class, teacher)
            })
            .collect();

        Ok(CurrentClasses {
            season: Some(season),
            catalog,
        })
    }

    async fn teachers_of(
        &self,
        classes: &[ClassOffering],
    ) -> Result<HashMap<TeacherId, Teacher>, ClubError> {
        let mut ids: Vec<TeacherId> = classes.iter().filter_map(|c| c.teacher_id().copied()).collect();
        ids.sort();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let teachers = self.teachers.find_by_ids(&ids).await?;
        Ok(teachers.into_iter().map(|t| (*t.id(), t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryClubStore;
    use crate::application::handlers::test_support::{class_details, seed_club, seed_season};
    use crate::domain::foundation::ClassId;

    fn service(store: &InMemoryClubStore) -> ClassCatalogService {
        let store = Arc::new(store.clone());
        ClassCatalogService::new(store.clone(), store.clone(), store)
    }

    #[tokio::test]
    async fn no_active_season_gives_empty_catalog() {
        let store = InMemoryClubStore::new();
        let club = seed_club(&store, "botlahug").await;
        let season = seed_season(&store, &club, 2024, false).await;
        let class = ClassOffering::new(ClassId::new(), *season.id(), class_details("Judo", 17)).unwrap();
        ClassRepository::save(&store, &class).await.unwrap();

        let current = service(&store).classes_for_current_season(&club).await.unwrap();

        assert!(current.season.is_none());
        assert!(current.catalog.is_empty());
    }

    #[tokio::test]
    async fn catalog_contains_only_active_season_classes() {
        let store = InMemoryClubStore::new();
        let club = seed_club(&store, "botlahug").await;
        let old = seed_season(&store, &club, 2023, false).await;
        let active = seed_season(&store, &club, 2024, true).await;
        let stale = ClassOffering::new(ClassId::new(), *old.id(), class_details("Old", 17)).unwrap();
        let current = ClassOffering::new(ClassId::new(), *active.id(), class_details("New", 17)).unwrap();
        ClassRepository::save(&store, &stale).await.unwrap();
        ClassRepository::save(&store, &current).await.unwrap();

        let result = service(&store).classes_for_current_season(&club).await.unwrap();

        assert_eq!(result.season.as_ref().map(Season::id), Some(active.id()));
        assert_eq!(result.catalog.len(), 1);
        assert!(result.catalog.contains(current.id()));
    }

    #[tokio::test]
    async fn classes_with_same_name_are_kept_apart() {
        let store = InMemoryClubStore::new();
        let club = seed_club(&store, "botlahug").await;
        let season = seed_season(&store, &club, 2024, true).await;
        for hour in [17, 18] {
            let class = ClassOffering::new(ClassId::new(), *season.id(), class_details("Judo", hour)).unwrap();
            ClassRepository::save(&store, &class).await.unwrap();
        }

        let result = service(&store).classes_for_current_season(&club).await.unwrap();

        assert_eq!(result.catalog.len(), 2);
    }

    #[tokio::test]
    async fn resolves_teacher_display_name() {
        let store = InMemoryClubStore::new();
        let club = seed_club(&store, "botlahug").await;
        let season = seed_season(&store, &club, 2024, true).await;
        let teacher = Teacher::new(TeacherId::new(), *club.id(), "Yael", "Cohen", "yael@example.com").unwrap();
        TeacherRepository::save(&store, &teacher).await.unwrap();

        let mut details = class_details("Judo", 17);
        details.teacher_id = Some(*teacher.id());
        let class = ClassOffering::new(ClassId::new(), *season.id(), details).unwrap();
        ClassRepository::save(&store, &class).await.unwrap();

        let result = service(&store).classes_for_current_season(&club).await.unwrap();

        let summary = result.catalog.get(class.id()).unwrap();
        assert_eq!(summary.teacher.as_deref(), Some("Yael Cohen"));
    }
}
