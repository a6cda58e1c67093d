mod common;

use common::{init_db, rsc, setup_test_db, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;

fn add(db: &str, title: &str, when: &str, loc: &str, dur: &str) -> assert_cmd::assert::Assert {
    rsc()
        .args([
            "--db", db, "--test", "add", title, "--at", when, "--loc", loc, "--dur", dur,
        ])
        .assert()
}

#[test]
fn init_creates_database() {
    let db = setup_test_db("cli_init");
    rsc()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
    assert!(Path::new(&db).exists());
}

#[test]
fn add_and_list() {
    let db = setup_test_db("cli_add_list");
    init_db(&db);

    add(&db, "Quarterly review", "2030-04-02 10:00", "park-city", "1h30m")
        .success()
        .stdout(contains("booked at Park City"));

    rsc()
        .args(["--db", &db, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Quarterly review"))
        .stdout(contains("2030-04-02 10:00"))
        .stdout(contains("2030-04-02 11:30"))
        .stdout(contains("1h 30m"));
}

#[test]
fn list_by_window() {
    let db = setup_test_db("cli_list_window");
    init_db(&db);

    add(&db, "Old checkup", "2020-01-15 08:00", "DALLAS", "30m").success();
    add(&db, "Future trip", "2031-06-01 09:00", "DALLAS", "2h").success();

    rsc()
        .args(["--db", &db, "--test", "list", "--when", "past"])
        .assert()
        .success()
        .stdout(contains("Old checkup"))
        .stdout(contains("Future trip").not());

    rsc()
        .args(["--db", &db, "--test", "list", "--when", "future"])
        .assert()
        .success()
        .stdout(contains("Future trip"))
        .stdout(contains("Old checkup").not());
}

#[test]
fn conflicting_add_is_refused_unless_forced() {
    let db = setup_test_db("cli_conflict");
    init_db(&db);

    add(&db, "Standup", "2030-05-05 09:00", "memphis", "45m").success();

    add(&db, "Overlap", "2030-05-05 08:50", "memphis", "45m")
        .failure()
        .stdout(contains("Standup"))
        .stderr(contains("Scheduling conflict"));

    // same slot, other site
    add(&db, "Elsewhere", "2030-05-05 09:00", "orlando", "45m").success();

    // back to back
    add(&db, "Next", "2030-05-05 09:45", "memphis", "15m").success();

    rsc()
        .args([
            "--db", &db, "--test", "add", "Overlap", "--at", "2030-05-05 08:50", "--loc",
            "memphis", "--dur", "45m", "--force",
        ])
        .assert()
        .success();
}

#[test]
fn conflicts_command_reports_overlaps() {
    let db = setup_test_db("cli_conflicts_cmd");
    init_db(&db);

    add(&db, "Surgery", "2030-07-01 13:00", "84101", "2h").success();

    rsc()
        .args([
            "--db", &db, "--test", "conflicts", "--at", "2030-07-01 14:00", "--loc",
            "salt lake city", "--dur", "30",
        ])
        .assert()
        .success()
        .stdout(contains("1 overlapping"))
        .stdout(contains("Surgery"));

    rsc()
        .args([
            "--db", &db, "--test", "conflicts", "--at", "2030-07-01 15:00", "--loc",
            "SALT_LAKE_CITY", "--dur", "30",
        ])
        .assert()
        .success()
        .stdout(contains("No conflicts"));
}

#[test]
fn edit_and_delete() {
    let db = setup_test_db("cli_edit_del");
    init_db(&db);

    add(&db, "Draft", "2030-08-01 16:00", "dallas", "20m").success();

    rsc()
        .args(["--db", &db, "--test", "edit", "1", "--title", "Final"])
        .assert()
        .success()
        .stdout(contains("Appointment #1 updated"))
        .stdout(contains("Final"));

    rsc()
        .args(["--db", &db, "--test", "edit", "99", "--title", "Nope"])
        .assert()
        .success()
        .stdout(contains("No appointment with id 99"));

    rsc()
        .args(["--db", &db, "--test", "del", "1"])
        .assert()
        .success()
        .stdout(contains("'Final' deleted"));

    rsc()
        .args(["--db", &db, "--test", "del", "1"])
        .assert()
        .success()
        .stdout(contains("No appointment with id 1"));
}

#[test]
fn delete_all_with_confirmation_flag() {
    let db = setup_test_db("cli_del_all");
    init_db(&db);

    add(&db, "A", "2030-09-01 09:00", "dallas", "20m").success();
    add(&db, "B", "2030-09-02 09:00", "dallas", "20m").success();

    rsc()
        .args(["--db", &db, "--test", "del", "--all", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 appointment(s) deleted"));

    rsc()
        .args(["--db", &db, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No appointments"));
}

#[test]
fn delete_all_cancelled_without_confirmation() {
    let db = setup_test_db("cli_del_all_cancel");
    init_db(&db);
    add(&db, "Stay", "2030-09-01 09:00", "dallas", "20m").success();

    rsc()
        .args(["--db", &db, "--test", "del", "--all"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rsc()
        .args(["--db", &db, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Stay"));
}

#[test]
fn invalid_input_is_reported() {
    let db = setup_test_db("cli_invalid");
    init_db(&db);

    add(&db, "Bad date", "2030-13-01 09:00", "dallas", "20m")
        .failure()
        .stderr(contains("Invalid date/time format"));

    add(&db, "Bad site", "2030-01-01 09:00", "atlantis", "20m")
        .failure()
        .stderr(contains("Invalid location"));

    add(&db, "Bad duration", "2030-01-01 09:00", "dallas", "forever")
        .failure()
        .stderr(contains("Invalid duration"));

    add(&db, "   ", "2030-01-01 09:00", "dallas", "20m")
        .failure()
        .stderr(contains("title must not be empty"));
}

#[test]
fn locations_lists_site_codes() {
    rsc()
        .args(["--test", "locations"])
        .assert()
        .success()
        .stdout(contains("84060"))
        .stdout(contains("PARK_CITY"))
        .stdout(contains("75201"));
}

#[test]
fn audit_log_records_writes() {
    let db = setup_test_db("cli_log");
    init_db(&db);
    add(&db, "Logged", "2030-10-01 09:00", "dallas", "20m").success();

    rsc()
        .args(["--db", &db, "--test", "log"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("insert"))
        .stdout(contains("Logged"));
}

#[test]
fn backup_copies_database() {
    let db = setup_test_db("cli_backup");
    init_db(&db);
    add(&db, "Saved", "2030-11-01 09:00", "dallas", "20m").success();

    let out = temp_out("cli_backup", "sqlite");
    rsc()
        .args(["--db", &db, "--test", "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup written"));
    assert!(Path::new(&out).exists());

    rsc()
        .args(["--db", &db, "--test", "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rsc()
        .args(["--db", &out, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Saved"));

    let zipped = temp_out("cli_backup_zip", "zip");
    let plain = zipped.replace(".zip", ".sqlite");
    fs::remove_file(&plain).ok();
    rsc()
        .args(["--db", &db, "--test", "backup", "--file", &plain, "--compress"])
        .assert()
        .success();
    assert!(Path::new(&zipped).exists());
    assert!(!Path::new(&plain).exists());
}

#[test]
fn db_info_and_check() {
    let db = setup_test_db("cli_db_info");
    init_db(&db);
    add(&db, "Counted", "2030-12-01 09:00", "st-george", "1h").success();

    rsc()
        .args(["--db", &db, "--test", "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Appointments  : 1"))
        .stdout(contains("St George"))
        .stdout(contains("Integrity check passed"));
}
