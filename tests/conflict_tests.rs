mod common;

use common::{appt, at};
use rschedule::core::codec;
use rschedule::core::conflict::{ConflictQuery, Interval};
use rschedule::models::location::Location;

#[test]
fn half_open_intervals() {
    let a = Interval::new(0, 60).unwrap();
    let b = Interval::new(60, 120).unwrap();
    let c = Interval::new(30, 90).unwrap();

    assert!(!a.overlaps(&b), "touching intervals do not overlap");
    assert!(!b.overlaps(&a));
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&b));
}

#[test]
fn degenerate_interval_never_overlaps() {
    let point = Interval::new(30, 30).unwrap();
    let wide = Interval::new(0, 60).unwrap();
    assert!(point.is_degenerate());
    assert!(!point.overlaps(&wide));
    assert!(!wide.overlaps(&point));
}

#[test]
fn reversed_interval_is_rejected() {
    assert!(Interval::new(10, 5).is_err());
}

#[test]
fn query_filters_site_and_excluded_identity() {
    let start = at(2025, 5, 1, 9, 0);
    let stored = vec![
        appt("same site", start, Location::Dallas, 60).with_id(1),
        appt("other site", start, Location::Memphis, 60).with_id(2),
        appt("self", start, Location::Dallas, 60).with_id(3),
        appt("later", at(2025, 5, 1, 10, 0), Location::Dallas, 30).with_id(4),
    ];

    let s = codec::encode(&start);
    let q = ConflictQuery::new(3, Location::Dallas.site_code(), s, s + 3600).unwrap();
    let found = q.detect(stored).unwrap();

    let ids: Vec<i64> = found.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn exclude_zero_ignores_nothing() {
    let start = at(2025, 5, 1, 9, 0);
    let candidate = appt("new", start, Location::Orlando, 30);
    let stored = appt("booked", start, Location::Orlando, 30).with_id(7);

    let q = ConflictQuery::for_appointment(&candidate).unwrap();
    assert_eq!(q.exclude_id, 0);
    assert!(q.matches(&stored).unwrap());
}
