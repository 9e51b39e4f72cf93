//! Integration tests for the club HTTP API.
//!
//! Drives the full axum router over the in-memory store:
//! 1. Public pages (season, classes, schedule, lookup, registration)
//! 2. Staff pages behind bearer tokens
//! 3. Error mapping and all-or-nothing writes

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

use botlahug::adapters::auth::MockSessionValidator;
use botlahug::adapters::clock::FixedClock;
use botlahug::adapters::http::{api_router, ClubAppState};
use botlahug::adapters::memory::InMemoryClubStore;
use botlahug::domain::athlete::{Athlete, AthleteProfile};
use botlahug::domain::class::{ClassDetails, ClassOffering};
use botlahug::domain::club::{Club, Teacher};
use botlahug::domain::foundation::{
    AthleteId, ClassId, ClubId, Role, SeasonId, TeacherId, Timestamp, UserId, WeekdaySet,
};
use botlahug::domain::season::Season;
use botlahug::ports::{
    AthleteRepository, ClassRepository, ClubRepository, SeasonRepository, TeacherRepository,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const MANAGER: &str = "manager-token";
const TEACHER: &str = "teacher-token";
const OUTSIDER: &str = "outsider-token";

struct TestClub {
    store: InMemoryClubStore,
    club: Club,
    app: Router,
}

impl TestClub {
    async fn new() -> Self {
        let store = InMemoryClubStore::new();
        let club = Club::new(ClubId::new(), "Bot LaHug", "botlahug").unwrap();
        ClubRepository::save(&store, &club).await.unwrap();

        let validator = MockSessionValidator::new()
            .with_club_user(MANAGER, UserId::new("manager").unwrap(), *club.id(), Role::Manager)
            .with_club_user(TEACHER, UserId::new("teacher").unwrap(), *club.id(), Role::Teacher)
            .with_club_user(OUTSIDER, UserId::new("outsider").unwrap(), ClubId::new(), Role::Manager);

        // Even minute: capitalized titles
        let at = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 11, 5, 18, 30, 0).unwrap());
        let state = ClubAppState::in_memory(store.clone()).with_clock(Arc::new(FixedClock(at)));
        let app = api_router(state, Arc::new(validator));

        Self { store, club, app }
    }

    async fn season(&self, start_year: i32, active: bool) -> Season {
        let season = Season::new(
            SeasonId::new(),
            *self.club.id(),
            NaiveDate::from_ymd_opt(start_year, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(start_year + 1, 6, 30).unwrap(),
        )
        .unwrap();
        SeasonRepository::save(&self.store, &season).await.unwrap();
        if active {
            self.store.activate(self.club.id(), season.id()).await.unwrap();
        }
        season
    }

    async fn class(&self, season: &Season, name: &str, hour: u32, days: &[&str]) -> ClassOffering {
        let class = ClassOffering::new(ClassId::new(), *season.id(), details(name, hour, days)).unwrap();
        ClassRepository::save(&self.store, &class).await.unwrap();
        class
    }

    async fn athlete(&self, code: &str) -> Athlete {
        let profile = AthleteProfile {
            athlete_code: Some(code.to_string()),
            first_name: "Dana".to_string(),
            last_name: "Levi".to_string(),
            dob: NaiveDate::from_ymd_opt(2012, 3, 14),
            email: "family@example.com".to_string(),
            phone: None,
            parent_name: None,
            parent_phone: None,
            home_address: None,
        };
        let athlete = Athlete::new(AthleteId::new(), *self.club.id(), profile, None).unwrap();
        AthleteRepository::save(&self.store, &athlete).await.unwrap();
        athlete
    }

    async fn send(&self, method: Method, path: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("/api/clubs/botlahug{}", path));
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, path, token, None).await
    }
}

fn details(name: &str, hour: u32, days: &[&str]) -> ClassDetails {
    ClassDetails {
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
        days: WeekdaySet::parse_codes(days).unwrap(),
        teacher_id: None,
        place: Some("Main dojo".to_string()),
        price: Decimal::new(25000, 2),
        registration_fee: Decimal::new(5000, 2),
        description: None,
    }
}

fn class_form(season: &Season, start_date: &str, end_date: &str) -> Value {
    json!({
        "season_id": season.id().to_string(),
        "name": "Judo Kids",
        "start_date": start_date,
        "end_date": end_date,
        "start_time": "09:00:00",
        "end_time": "10:00:00",
        "days": ["mon", "wed"],
        "price": "250.00",
        "registration_fee": "50.00",
    })
}

fn new_athlete_form(season: &Season, class: &ClassOffering) -> Value {
    json!({
        "season_id": season.id().to_string(),
        "class_id": class.id().to_string(),
        "first_name": "Noa",
        "last_name": "Cohen",
        "dob": "2014-03-02",
        "email": "noa@example.com",
        "status": "active",
    })
}

// =============================================================================
// Season and catalog
// =============================================================================

#[tokio::test]
async fn unknown_club_is_not_found() {
    let t = TestClub::new().await;

    let response = t
        .app
        .clone()
        .oneshot(Request::builder().uri("/api/clubs/nowhere/classes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn no_active_season_means_empty_catalog() {
    let t = TestClub::new().await;
    let inactive = t.season(2023, false).await;
    t.class(&inactive, "Old class", 9, &["mon"]).await;

    let (status, body) = t.get("/classes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["season"].is_null());
    assert_eq!(body["classes"], json!([]));
    assert!(body["page"]["season"].is_null());
}

#[tokio::test]
async fn catalog_lists_active_season_classes_with_page_context() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    t.class(&season, "Evening", 18, &["tue"]).await;
    t.class(&season, "Morning", 9, &["mon"]).await;

    let (status, body) = t.get("/classes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"]["title"], "Classes");
    assert_eq!(body["page"]["easterEgg"], true);
    assert_eq!(body["page"]["season"], "2024 - 2025");
    let names: Vec<&str> = body["classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Morning", "Evening"]);
    assert_eq!(body["classes"][0]["start_time"], "09:00");
}

#[tokio::test]
async fn active_season_endpoint_reports_club_and_season() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;

    let (status, body) = t.get("/season", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["club"]["web_name"], "botlahug");
    assert_eq!(body["season"]["id"], season.id().to_string());
    assert_eq!(body["season"]["is_active"], true);
}

// =============================================================================
// Weekly schedule
// =============================================================================

#[tokio::test]
async fn schedule_grid_is_dense_over_requested_days() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    t.class(&season, "Judo", 9, &["mon", "wed"]).await;

    let (status, body) = t.get("/schedule", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"].as_array().unwrap().len(), 7);
    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0]["time"], "09:00-10:00");

    let row = slots[0]["days"].as_object().unwrap();
    assert_eq!(row.len(), 7);
    for (day, cells) in row {
        let expected = if day == "Monday" || day == "Wednesday" { 1 } else { 0 };
        assert_eq!(cells.as_array().unwrap().len(), expected, "{}", day);
    }
    assert_eq!(row["Monday"][0]["name"], "Judo");
    assert_eq!(row["Monday"][0]["color"], "red");

    let keyed = &body["time_slots"]["09:00-10:00"];
    assert_eq!(keyed["Wednesday"][0]["ID"], slots[0]["days"]["Wednesday"][0]["ID"]);
    assert_eq!(keyed["Friday"], json!([]));
}

#[tokio::test]
async fn weekend_days_survive_storage_and_grid() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Weekend", 10, &["sat", "sun"]).await;

    let stored = ClassRepository::find_by_id(&t.store, class.id()).await.unwrap().unwrap();
    assert_eq!(stored.days().codes(), vec!["sun", "sat"]);

    let (_, body) = t.get("/schedule?days=sun,sat", None).await;
    assert_eq!(body["days"], json!(["Sunday", "Saturday"]));
    let row = &body["slots"][0]["days"];
    assert_eq!(row["Sunday"].as_array().unwrap().len(), 1);
    assert_eq!(row["Saturday"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn schedule_rejects_unknown_day_code() {
    let t = TestClub::new().await;
    t.season(2024, true).await;

    let (status, body) = t.get("/schedule?days=mon,funday", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["days_of_week"].is_array());
}

// =============================================================================
// Class management
// =============================================================================

#[tokio::test]
async fn manager_creates_class() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;

    let (status, body) = t
        .send(Method::POST, "/classes", Some(MANAGER), Some(class_form(&season, "2024-09-01", "2025-06-30")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Judo Kids");
    assert_eq!(body["days"], json!(["mon", "wed"]));
    assert_eq!(t.store.class_count().await, 1);
}

#[tokio::test]
async fn class_with_reversed_dates_is_rejected_without_writing() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;

    let (status, body) = t
        .send(Method::POST, "/classes", Some(MANAGER), Some(class_form(&season, "2024-06-01", "2024-05-01")))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["details"]["end_date"].is_array());
    assert_eq!(t.store.class_count().await, 0);
}

#[tokio::test]
async fn malformed_class_dates_and_times_are_field_errors() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let mut form = class_form(&season, "01/09/2024", "2025-06-30");
    form["end_time"] = json!("ten o'clock");
    form["price"] = json!("cheap");

    let (status, body) = t.send(Method::POST, "/classes", Some(MANAGER), Some(form)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["start_date"][0], "Enter a valid date.");
    assert_eq!(body["details"]["end_time"][0], "Enter a valid time.");
    assert_eq!(body["details"]["price"][0], "Enter a number.");
    assert_eq!(t.store.class_count().await, 0);
}

#[tokio::test]
async fn class_edit_with_reversed_dates_leaves_class_untouched() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;

    let (status, body) = t
        .send(
            Method::PUT,
            &format!("/classes/{}", class.id()),
            Some(MANAGER),
            Some(class_form(&season, "2024-06-01", "2024-05-01")),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["end_date"].is_array());
    let stored = ClassRepository::find_by_id(&t.store, class.id()).await.unwrap().unwrap();
    assert_eq!(stored, class);
}

#[tokio::test]
async fn class_ending_before_it_starts_is_rejected_on_end_time() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let mut form = class_form(&season, "2024-09-01", "2025-06-30");
    form["end_time"] = json!("09:00:00");

    let (status, body) = t.send(Method::POST, "/classes", Some(MANAGER), Some(form)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["end_time"].is_array());
}

#[tokio::test]
async fn teacher_from_another_club_is_an_invalid_choice() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let stranger = Teacher::new(TeacherId::new(), ClubId::new(), "Avi", "Bar", "avi@example.com").unwrap();
    TeacherRepository::save(&t.store, &stranger).await.unwrap();
    let mut form = class_form(&season, "2024-09-01", "2025-06-30");
    form["teacher_id"] = json!(stranger.id().to_string());

    let (status, body) = t.send(Method::POST, "/classes", Some(MANAGER), Some(form)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["teacher"].is_array());
}

#[tokio::test]
async fn class_management_requires_a_manager() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let form = class_form(&season, "2024-09-01", "2025-06-30");

    let (status, _) = t.send(Method::POST, "/classes", None, Some(form.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = t.send(Method::POST, "/classes", Some(TEACHER), Some(form.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = t.send(Method::POST, "/classes", Some(OUTSIDER), Some(form)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
// Seasons
// =============================================================================

#[tokio::test]
async fn activating_a_season_leaves_exactly_one_active() {
    let t = TestClub::new().await;
    t.season(2023, true).await;
    let next = t.season(2024, false).await;

    let (status, body) = t
        .send(Method::POST, &format!("/seasons/{}/activate", next.id()), Some(MANAGER), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_active"], true);

    let seasons = SeasonRepository::list_by_club(&t.store, t.club.id()).await.unwrap();
    let active: Vec<_> = seasons.iter().filter(|s| s.is_active()).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id(), next.id());
}

#[tokio::test]
async fn created_season_starts_inactive() {
    let t = TestClub::new().await;

    let (status, body) = t
        .send(
            Method::POST,
            "/seasons",
            Some(MANAGER),
            Some(json!({ "start_date": "2025-09-01", "end_date": "2026-06-30" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["label"], "2025 - 2026");
    assert_eq!(body["is_active"], false);
}

#[tokio::test]
async fn season_with_malformed_date_is_a_field_error() {
    let t = TestClub::new().await;

    let (status, body) = t
        .send(
            Method::POST,
            "/seasons",
            Some(MANAGER),
            Some(json!({ "start_date": "2025/09/01", "end_date": "2026-06-30" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["start_date"][0], "Enter a valid date.");
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn new_athlete_registration_is_always_new() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;

    let (status, body) = t
        .send(Method::POST, "/registrations", None, Some(new_athlete_form(&season, &class)))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["registration"]["status"], "new");
    assert_eq!(
        body["registration"]["description"],
        "Bot LaHug athlete, joined the club in the 2024 - 2025 season, trains in Judo class"
    );
    assert_eq!(body["athlete"]["full_name"], "Noa Cohen");
    assert_eq!(t.store.athlete_count().await, 1);
    assert_eq!(t.store.registration_count().await, 1);
}

#[tokio::test]
async fn new_athlete_registration_reports_every_bad_field() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;
    let mut form = new_athlete_form(&season, &class);
    form["first_name"] = json!("");
    form["email"] = json!("not-an-email");

    let (status, body) = t.send(Method::POST, "/registrations", None, Some(form)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["first_name"].is_array());
    assert!(body["details"]["email"].is_array());
    assert_eq!(t.store.athlete_count().await, 0);
}

#[tokio::test]
async fn bad_season_id_is_reported_with_athlete_fields() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;
    let mut form = new_athlete_form(&season, &class);
    form["season_id"] = json!("not-a-uuid");
    form["first_name"] = json!("");
    form["email"] = json!("not-an-email");

    let (status, body) = t.send(Method::POST, "/registrations", None, Some(form)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["season"].is_array());
    assert!(body["details"]["first_name"].is_array());
    assert!(body["details"]["email"].is_array());
    assert_eq!(t.store.athlete_count().await, 0);
}

#[tokio::test]
async fn malformed_dob_is_a_field_error() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;
    let mut form = new_athlete_form(&season, &class);
    form["dob"] = json!("02/03/2014");

    let (status, body) = t.send(Method::POST, "/registrations", None, Some(form)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["dob"][0], "Enter a valid date.");
    assert_eq!(t.store.athlete_count().await, 0);
}

#[tokio::test]
async fn registration_for_inactive_season_is_not_found() {
    let t = TestClub::new().await;
    t.season(2024, true).await;
    let old = t.season(2023, false).await;
    let class = t.class(&old, "Judo", 9, &["mon"]).await;

    let (status, _) = t
        .send(Method::POST, "/registrations", None, Some(new_athlete_form(&old, &class)))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn failed_registration_write_leaves_no_athlete() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;
    t.store.fail_registration_writes(true);

    let (status, body) = t
        .send(Method::POST, "/registrations", None, Some(new_athlete_form(&season, &class)))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(t.store.athlete_count().await, 0);
    assert_eq!(t.store.registration_count().await, 0);
}

#[tokio::test]
async fn registration_options_cover_only_the_active_season() {
    let t = TestClub::new().await;
    let active = t.season(2024, true).await;
    let inactive = t.season(2023, false).await;
    let a = t.class(&active, "A", 9, &["mon"]).await;
    let b = t.class(&active, "B", 10, &["tue"]).await;
    t.class(&inactive, "C", 11, &["wed"]).await;
    let athlete = t.athlete("A-1").await;

    let (status, body) = t
        .get(&format!("/athletes/{}/registration-options", athlete.id()), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["ID"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![a.id().to_string(), b.id().to_string()]);
}

#[tokio::test]
async fn existing_athlete_cannot_pick_a_class_outside_the_active_season() {
    let t = TestClub::new().await;
    t.season(2024, true).await;
    let inactive = t.season(2023, false).await;
    let stale = t.class(&inactive, "C", 11, &["wed"]).await;
    let athlete = t.athlete("A-1").await;

    let (status, body) = t
        .send(
            Method::POST,
            &format!("/athletes/{}/registrations", athlete.id()),
            None,
            Some(json!({ "class_id": stale.id().to_string() })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["class"].is_array());
    assert_eq!(t.store.registration_count().await, 0);
}

#[tokio::test]
async fn existing_athlete_registration_is_new_with_form_description() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;
    let athlete = t.athlete("A-1").await;

    let (status, body) = t
        .send(
            Method::POST,
            &format!("/athletes/{}/registrations", athlete.id()),
            None,
            Some(json!({ "class_id": class.id().to_string() })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "new");
    assert_eq!(body["description"], "Form auto created registration");
}

#[tokio::test]
async fn manager_changes_registration_status() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;
    let (_, created) = t
        .send(Method::POST, "/registrations", None, Some(new_athlete_form(&season, &class)))
        .await;
    let path = format!(
        "/registrations/{}/status",
        created["registration"]["id"].as_str().unwrap()
    );

    let (status, body) = t
        .send(Method::PATCH, &path, Some(MANAGER), Some(json!({ "status": "active" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["previous"], "new");
    assert_eq!(body["registration"]["status"], "active");

    let (status, _) = t
        .send(Method::PATCH, &path, Some(MANAGER), Some(json!({ "status": "new" })))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

// =============================================================================
// Athlete directory and roster
// =============================================================================

#[tokio::test]
async fn lookup_finds_athlete_by_card_code() {
    let t = TestClub::new().await;
    let athlete = t.athlete("A-17").await;

    let (status, body) = t.get("/athletes/lookup?athlete_id=A-17", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], athlete.id().to_string());

    let (status, _) = t.get("/athletes/lookup?athlete_id=missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn roster_lists_registered_athletes_for_staff() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;
    t.send(Method::POST, "/registrations", None, Some(new_athlete_form(&season, &class)))
        .await;
    let path = format!("/classes/{}/roster", class.id());

    let (status, _) = t.get(&path, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = t.get(&path, Some(TEACHER)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class"]["name"], "Judo");
    let athletes = body["athletes"].as_array().unwrap();
    assert_eq!(athletes.len(), 1);
    assert_eq!(athletes[0]["name"], "Noa Cohen");
    assert_eq!(athletes[0]["dob"], "2014-03-02");
}

#[tokio::test]
async fn athlete_profile_shows_registrations_with_class_names() {
    let t = TestClub::new().await;
    let season = t.season(2024, true).await;
    let class = t.class(&season, "Judo", 9, &["mon"]).await;
    let (_, created) = t
        .send(Method::POST, "/registrations", None, Some(new_athlete_form(&season, &class)))
        .await;
    let athlete_id = created["athlete"]["id"].as_str().unwrap().to_string();

    let (status, body) = t.get(&format!("/athletes/{}", athlete_id), Some(MANAGER)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["registrations"][0]["class_name"], "Judo");

    let (status, list) = t.get("/athletes", Some(TEACHER)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_path_id_is_bad_request() {
    let t = TestClub::new().await;

    let (status, body) = t.get("/athletes/not-a-uuid", Some(MANAGER)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid athlete ID");
}
