use async_trait::async_trait;

use crate::domain::class::ClassOffering;
use crate::domain::foundation::{ClassId, DomainError, ErrorCode, SeasonId};
use crate::ports::ClassRepository;

use super::InMemoryClubStore;

#[async_trait]
impl ClassRepository for InMemoryClubStore {
    async fn save(&self, class: &ClassOffering) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.seasons.contains_key(class.season_id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Failed to save class: season does not exist",
            ));
        }
        tables.classes.insert(*class.id(), class.clone());
        Ok(())
    }

    async fn update(&self, class: &ClassOffering) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.classes.get_mut(class.id()) {
            Some(stored) => {
                *stored = class.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ClassNotFound,
                format!("Class not found: {}", class.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &ClassId) -> Result<Option<ClassOffering>, DomainError> {
        Ok(self.tables.read().await.classes.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[ClassId]) -> Result<Vec<ClassOffering>, DomainError> {
        let tables = self.tables.read().await;
        Ok(ids.iter().filter_map(|id| tables.classes.get(id).cloned()).collect())
    }

    async fn find_by_season(&self, season_id: &SeasonId) -> Result<Vec<ClassOffering>, DomainError> {
        let tables = self.tables.read().await;
        let mut classes: Vec<_> = tables
            .classes
            .values()
            .filter(|c| c.in_season(season_id))
            .cloned()
            .collect();
        classes.sort_by_key(|c| (c.start_date(), c.start_time(), *c.id()));
        Ok(classes)
    }

    async fn find_in_season(
        &self,
        season_id: &SeasonId,
        class_id: &ClassId,
    ) -> Result<Option<ClassOffering>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .classes
            .get(class_id)
            .filter(|c| c.in_season(season_id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::class::ClassDetails;
    use crate::domain::foundation::{ClubId, WeekdaySet};
    use crate::domain::season::Season;
    use crate::ports::SeasonRepository;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;

    fn details(name: &str, hour: u32) -> ClassDetails {
        ClassDetails {
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
            days: WeekdaySet::parse_codes(["mon"]).unwrap(),
            teacher_id: None,
            place: None,
            price: Decimal::new(25000, 2),
            registration_fee: Decimal::ZERO,
            description: None,
        }
    }

    async fn store_with_season() -> (InMemoryClubStore, SeasonId) {
        let store = InMemoryClubStore::new();
        let season = Season::new(
            SeasonId::new(),
            ClubId::new(),
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
        .unwrap();
        SeasonRepository::save(&store, &season).await.unwrap();
        (store, *season.id())
    }

    #[tokio::test]
    async fn find_by_season_orders_by_start_time() {
        let (store, season_id) = store_with_season().await;
        let late = ClassOffering::new(ClassId::new(), season_id, details("Late", 19)).unwrap();
        let early = ClassOffering::new(ClassId::new(), season_id, details("Early", 17)).unwrap();
        ClassRepository::save(&store, &late).await.unwrap();
        ClassRepository::save(&store, &early).await.unwrap();

        let names: Vec<_> = store
            .find_by_season(&season_id)
            .await
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Early", "Late"]);
    }

    #[tokio::test]
    async fn find_in_season_ignores_other_seasons() {
        let (store, season_id) = store_with_season().await;
        let class = ClassOffering::new(ClassId::new(), season_id, details("Judo", 17)).unwrap();
        ClassRepository::save(&store, &class).await.unwrap();

        assert!(store.find_in_season(&season_id, class.id()).await.unwrap().is_some());
        assert!(store
            .find_in_season(&SeasonId::new(), class.id())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_missing_class_is_not_found() {
        let (store, season_id) = store_with_season().await;
        let class = ClassOffering::new(ClassId::new(), season_id, details("Judo", 17)).unwrap();

        let err = store.update(&class).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ClassNotFound);
    }

    #[tokio::test]
    async fn save_requires_existing_season() {
        let store = InMemoryClubStore::new();
        let class = ClassOffering::new(ClassId::new(), SeasonId::new(), details("Judo", 17)).unwrap();

        assert!(ClassRepository::save(&store, &class).await.is_err());
        assert_eq!(store.class_count().await, 0);
    }
}
