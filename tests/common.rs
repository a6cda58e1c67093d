#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rschedule::models::appointment::Appointment;
use rschedule::models::location::Location;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsc() -> Command {
    cargo_bin_cmd!("rschedule")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rschedule.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI (test mode leaves the config alone)
pub fn init_db(db_path: &str) {
    rsc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn appt(title: &str, start: NaiveDateTime, loc: Location, minutes: i64) -> Appointment {
    Appointment::new(title, start, loc, Duration::minutes(minutes), "")
}
