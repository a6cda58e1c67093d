mod common;

use chrono::Duration;
use common::appt;
use rschedule::core::add::{AddLogic, AppointmentPatch, SaveResult};
use rschedule::core::del::DeleteLogic;
use rschedule::core::service::ScheduleService;
use rschedule::core::store::{AppointmentStore, UpsertOutcome};
use rschedule::models::location::Location;
use rschedule::models::query_shape::QueryShape;
use rschedule::utils::date;

fn service() -> ScheduleService {
    ScheduleService::new(AppointmentStore::in_memory().expect("in-memory store"))
}

async fn insert(svc: &ScheduleService, a: rschedule::models::appointment::Appointment) -> i64 {
    match svc.upsert_appointment(a).await.unwrap() {
        UpsertOutcome::Inserted(id) => id,
        other => panic!("expected Inserted, got {:?}", other),
    }
}

#[tokio::test]
async fn subscription_starts_with_current_snapshot() {
    let svc = service();
    let id = insert(&svc, appt("Early", date::now(), Location::Dallas, 30)).await;

    let sub = svc.all_appointments().await.unwrap();
    assert_eq!(sub.shape(), QueryShape::All);
    let current = sub.current();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, id);
}

#[tokio::test]
async fn write_pushes_new_snapshot_to_subscribers() {
    let svc = service();
    let mut today = svc.today_appointments().await.unwrap();
    assert!(today.current().is_empty());

    let id = insert(&svc, appt("Now", date::now(), Location::Memphis, 15)).await;

    let snapshot = today.changed().await.expect("service alive");
    assert_eq!(snapshot.iter().map(|a| a.id).collect::<Vec<_>>(), vec![id]);
}

#[tokio::test]
async fn unaffected_shapes_see_no_change() {
    let svc = service();
    let past = svc.past_appointments().await.unwrap();
    let future = svc.future_appointments().await.unwrap();

    let tomorrow = date::now() + Duration::days(1);
    let id = insert(&svc, appt("Tomorrow", tomorrow, Location::Orlando, 60)).await;

    assert!(past.current().is_empty());
    assert_eq!(future.current().len(), 1);
    assert_eq!(future.current()[0].id, id);
}

#[tokio::test]
async fn delete_refreshes_and_cancel_unsubscribes() {
    let svc = service();
    let a = appt("Temp", date::now(), Location::Dallas, 30);
    let id = insert(&svc, a.clone()).await;

    let mut all = svc.all_appointments().await.unwrap();
    assert_eq!(all.current().len(), 1);

    assert_eq!(svc.delete_appointment(a.with_id(id)).await.unwrap(), 1);
    assert!(all.changed().await.unwrap().is_empty());

    all.cancel();
    // still usable without subscribers
    assert_eq!(svc.delete_all().await.unwrap(), 0);
}

#[tokio::test]
async fn save_blocks_on_conflict_unless_forced() {
    let svc = service();
    let start = date::now() + Duration::days(2);
    insert(&svc, appt("Booked", start, Location::ParkCity, 60)).await;

    let clash = appt("Clash", start + Duration::minutes(30), Location::ParkCity, 30);
    match AddLogic::save(&svc, clash.clone(), true).await.unwrap() {
        SaveResult::Blocked(hits) => assert_eq!(hits.len(), 1),
        other => panic!("expected Blocked, got {:?}", other),
    }

    let other_site = appt("Elsewhere", start, Location::Dallas, 30);
    assert!(matches!(
        AddLogic::save(&svc, other_site, true).await.unwrap(),
        SaveResult::Saved(UpsertOutcome::Inserted(_))
    ));

    assert!(matches!(
        AddLogic::save(&svc, clash, false).await.unwrap(),
        SaveResult::Saved(UpsertOutcome::Inserted(_))
    ));
    assert_eq!(svc.snapshot(QueryShape::All).await.unwrap().len(), 3);
}

#[tokio::test]
async fn edit_does_not_conflict_with_itself() {
    let svc = service();
    let start = date::now() + Duration::days(3);
    let id = insert(&svc, appt("Workshop", start, Location::SanDiego, 60)).await;

    let patch = AppointmentPatch {
        duration: Some(Duration::minutes(90)),
        ..Default::default()
    };
    let (result, updated) = AddLogic::edit(&svc, id, &patch, true).await.unwrap();
    assert!(matches!(result, SaveResult::Saved(UpsertOutcome::Updated)));
    assert_eq!(updated.unwrap().duration, Duration::minutes(90));

    let (missing, none) = AddLogic::edit(&svc, id + 100, &patch, true).await.unwrap();
    assert!(matches!(missing, SaveResult::Missing));
    assert!(none.is_none());
}

#[tokio::test]
async fn delete_by_id() {
    let svc = service();
    let id = insert(&svc, appt("Drop", date::now(), Location::SaltLakeCity, 10)).await;

    let removed = DeleteLogic::by_id(&svc, id).await.unwrap();
    assert_eq!(removed.map(|a| a.title), Some("Drop".to_string()));
    assert!(DeleteLogic::by_id(&svc, id).await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_writes_are_serialized() {
    let svc = service();
    let base = date::now() + Duration::days(5);

    let mut handles = Vec::new();
    for i in 0..8 {
        let svc = svc.clone();
        let a = appt(
            &format!("Slot {i}"),
            base + Duration::hours(i),
            Location::Dallas,
            30,
        );
        handles.push(tokio::spawn(async move { svc.upsert_appointment(a).await }));
    }

    let mut ids = Vec::new();
    for h in handles {
        if let UpsertOutcome::Inserted(id) = h.await.unwrap().unwrap() {
            ids.push(id);
        }
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
    assert_eq!(svc.snapshot(QueryShape::Future).await.unwrap().len(), 8);
}

#[tokio::test]
async fn committed_write_is_reported_when_refresh_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("refresh.sqlite");
    let path = path.to_string_lossy().to_string();

    let svc = ScheduleService::open(&path).await.unwrap();
    let all = svc.all_appointments().await.unwrap();

    // a row no Location maps to makes every re-query of All fail
    let raw = rusqlite::Connection::open(&path).unwrap();
    raw.execute(
        "INSERT INTO appointments (title, datetime, location, duration, description)
         VALUES ('Corrupt', 0, 99999, 60, '')",
        [],
    )
    .unwrap();

    let outcome = svc
        .upsert_appointment(appt("Real", date::now(), Location::Dallas, 30))
        .await
        .unwrap();
    assert!(matches!(outcome, UpsertOutcome::Inserted(id) if id > 0));

    let stored: i64 = raw
        .query_row(
            "SELECT COUNT(*) FROM appointments WHERE title = 'Real'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, 1);
    assert!(all.current().is_empty());
}

#[tokio::test]
async fn concurrent_saves_book_a_slot_once() {
    let svc = service();
    let start = date::now() + Duration::days(6);

    let mut handles = Vec::new();
    for i in 0..8 {
        let svc = svc.clone();
        let a = appt(&format!("Racer {i}"), start, Location::Memphis, 45);
        handles.push(tokio::spawn(
            async move { AddLogic::save(&svc, a, true).await },
        ));
    }

    let mut saved = 0;
    let mut blocked = 0;
    for h in handles {
        match h.await.unwrap().unwrap() {
            SaveResult::Saved(UpsertOutcome::Inserted(_)) => saved += 1,
            SaveResult::Blocked(_) => blocked += 1,
            other => panic!("unexpected {:?}", other),
        }
    }
    assert_eq!(saved, 1);
    assert_eq!(blocked, 7);
    assert_eq!(svc.snapshot(QueryShape::All).await.unwrap().len(), 1);
}
