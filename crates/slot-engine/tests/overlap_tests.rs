//! Truth table for the half-open interval overlap predicate.

use chrono::{DateTime, TimeZone, Utc};
use slot_engine::overlap::overlaps;

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, hour, min, 0).unwrap()
}

#[test]
fn disjoint_intervals_do_not_overlap() {
    assert!(!overlaps(at(9, 0), at(10, 0), at(11, 0), at(12, 0)));
    assert!(!overlaps(at(11, 0), at(12, 0), at(9, 0), at(10, 0)));
}

#[test]
fn touching_endpoints_do_not_overlap() {
    // [09:00, 10:00) and [10:00, 11:00) share only the boundary point.
    assert!(!overlaps(at(9, 0), at(10, 0), at(10, 0), at(11, 0)));
    assert!(!overlaps(at(10, 0), at(11, 0), at(9, 0), at(10, 0)));
}

#[test]
fn partial_overlap_is_detected_in_both_directions() {
    assert!(overlaps(at(9, 0), at(10, 30), at(10, 0), at(11, 0)));
    assert!(overlaps(at(10, 0), at(11, 0), at(9, 0), at(10, 30)));
}

#[test]
fn containment_is_an_overlap() {
    assert!(overlaps(at(9, 0), at(12, 0), at(10, 0), at(11, 0)));
    assert!(overlaps(at(10, 0), at(11, 0), at(9, 0), at(12, 0)));
}

#[test]
fn identical_intervals_overlap() {
    assert!(overlaps(at(9, 0), at(10, 0), at(9, 0), at(10, 0)));
}

#[test]
fn inverted_interval_before_the_other_is_inert() {
    // An inverted interval whose reversed span sits outside the other never
    // passes the predicate.
    assert!(!overlaps(at(10, 0), at(9, 0), at(10, 30), at(11, 0)));
}

#[test]
fn degenerate_interval_strictly_inside_satisfies_the_raw_predicate() {
    // The rule is applied verbatim, so a zero-length interval strictly inside
    // another still registers. Degenerate inputs are tolerated, not rejected.
    assert!(overlaps(at(10, 0), at(10, 0), at(9, 0), at(11, 0)));
}
