//! Fixtures shared by handler tests.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::adapters::memory::InMemoryClubStore;
use crate::domain::athlete::{Athlete, AthleteProfile};
use crate::domain::class::{ClassDetails, ClassOffering};
use crate::domain::club::Club;
use crate::domain::foundation::{
    AthleteId, AuthenticatedUser, ClassId, ClubId, Role, SeasonId, UserId, WeekdaySet,
};
use crate::domain::season::Season;
use crate::ports::{AthleteRepository, ClassRepository, ClubRepository, SeasonRepository};

pub async fn seed_club(store: &InMemoryClubStore, web_name: &str) -> Club {
    let club = Club::new(ClubId::new(), "Bot LaHug", web_name).unwrap();
    ClubRepository::save(store, &club).await.unwrap();
    club
}

pub async fn seed_season(store: &InMemoryClubStore, club: &Club, start_year: i32, active: bool) -> Season {
    let season = Season::new(
        SeasonId::new(),
        *club.id(),
        NaiveDate::from_ymd_opt(start_year, 9, 1).unwrap(),
        NaiveDate::from_ymd_opt(start_year + 1, 6, 30).unwrap(),
    )
    .unwrap();
    SeasonRepository::save(store, &season).await.unwrap();
    if active {
        store.activate(club.id(), season.id()).await.unwrap();
    }
    SeasonRepository::find_by_id(store, season.id()).await.unwrap().unwrap()
}

pub fn class_details(name: &str, hour: u32) -> ClassDetails {
    ClassDetails {
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
        days: WeekdaySet::parse_codes(["mon", "wed"]).unwrap(),
        teacher_id: None,
        place: Some("Main dojo".to_string()),
        price: Decimal::new(25000, 2),
        registration_fee: Decimal::new(5000, 2),
        description: None,
    }
}

pub async fn seed_class(store: &InMemoryClubStore, season: &Season, name: &str, hour: u32) -> ClassOffering {
    let class = ClassOffering::new(ClassId::new(), *season.id(), class_details(name, hour)).unwrap();
    ClassRepository::save(store, &class).await.unwrap();
    class
}

pub fn athlete_profile(first: &str, last: &str) -> AthleteProfile {
    AthleteProfile {
        athlete_code: None,
        first_name: first.to_string(),
        last_name: last.to_string(),
        dob: NaiveDate::from_ymd_opt(2012, 3, 14),
        email: "family@example.com".to_string(),
        phone: Some("0501234567".to_string()),
        parent_name: None,
        parent_phone: None,
        home_address: None,
    }
}

pub async fn seed_athlete(store: &InMemoryClubStore, club: &Club, code: &str) -> Athlete {
    let mut profile = athlete_profile("Dana", "Levi");
    profile.athlete_code = Some(code.to_string());
    let athlete = Athlete::new(AthleteId::new(), *club.id(), profile, None).unwrap();
    AthleteRepository::save(store, &athlete).await.unwrap();
    athlete
}

pub fn user_with_role(club: &Club, role: Role) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new("user-1").unwrap(), "staff@example.com", None)
        .with_club_role(*club.id(), role)
}

pub fn manager(club: &Club) -> AuthenticatedUser {
    user_with_role(club, Role::Manager)
}

pub fn visitor() -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new("visitor").unwrap(), "visitor@example.com", None)
}
