mod common;

use chrono::{Duration, NaiveDate};
use common::at;
use rschedule::core::codec;
use rschedule::errors::AppError;

#[test]
fn encode_is_seconds_since_naive_epoch() {
    assert_eq!(codec::encode(&at(1970, 1, 1, 0, 0)), 0);
    assert_eq!(codec::encode(&at(1970, 1, 2, 0, 0)), 86_400);
    assert_eq!(codec::encode(&at(1969, 12, 31, 23, 59)), -60);
}

#[test]
fn encode_preserves_order() {
    let a = at(2025, 3, 9, 1, 59);
    let b = at(2025, 3, 9, 2, 30); // would not exist in many local zones
    let c = at(2025, 11, 2, 1, 30);
    assert!(codec::encode(&a) < codec::encode(&b));
    assert!(codec::encode(&b) < codec::encode(&c));
}

#[test]
fn decode_inverts_encode_at_second_precision() {
    let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_milli_opt(13, 45, 12, 987)
        .unwrap();

    let back = codec::decode(codec::encode(&dt)).unwrap();
    assert_eq!(back, codec::truncate_to_second(&dt));
    assert_eq!(back, at(2024, 2, 29, 13, 45) + Duration::seconds(12));
}

#[test]
fn decode_out_of_range_is_invalid_timestamp() {
    assert!(matches!(
        codec::decode(i64::MAX),
        Err(AppError::InvalidTimestamp(_))
    ));
    assert!(matches!(
        codec::decode(i64::MIN),
        Err(AppError::InvalidTimestamp(_))
    ));
}

#[test]
fn day_bounds_cover_one_day() {
    let day = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
    let (start, next) = codec::day_bounds(day).unwrap();
    assert_eq!(start, codec::encode(&at(2025, 6, 18, 0, 0)));
    assert_eq!(next - start, 86_400);
}

#[test]
fn durations_are_whole_non_negative_seconds() {
    assert_eq!(
        codec::encode_duration(&Duration::milliseconds(90_500)).unwrap(),
        90
    );
    assert!(matches!(
        codec::encode_duration(&Duration::seconds(-1)),
        Err(AppError::InvalidAppointment(_))
    ));
    assert_eq!(codec::decode_duration(2700).unwrap(), Duration::minutes(45));
    assert!(matches!(
        codec::decode_duration(-5),
        Err(AppError::InvalidTimestamp(_))
    ));
}

#[test]
fn interval_end_overflow_is_rejected() {
    assert_eq!(codec::interval_end(100, 50).unwrap(), 150);
    assert!(codec::interval_end(i64::MAX, 1).is_err());
}
