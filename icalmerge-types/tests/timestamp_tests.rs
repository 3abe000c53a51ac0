use icalmerge_types::{Error, Timestamp};
use proptest::prelude::*;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn from_unix_round_trips_seconds() {
    let ts = Timestamp::from_unix(1_059_570_036).unwrap();
    assert_eq!(ts.unix_seconds(), 1_059_570_036);
}

#[test]
fn epoch_is_zero() {
    let ts = Timestamp::from_utc(1970, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(ts.unix_seconds(), 0);
}

#[test]
fn from_utc_known_instant() {
    let ts = Timestamp::from_utc(2003, 7, 30, 13, 0, 36).unwrap();
    assert_eq!(ts.unix_seconds(), 1_059_570_036);
}

#[test]
fn from_utc_before_epoch() {
    let ts = Timestamp::from_utc(1969, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(ts.unix_seconds(), -1);

    let ts = Timestamp::from_utc(1900, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(ts.unix_seconds(), -2_208_988_800);
}

#[test]
fn from_utc_leap_day() {
    let ts = Timestamp::from_utc(2000, 2, 29, 23, 59, 59).unwrap();
    assert_eq!(ts.unix_seconds(), 951_868_799);
}

#[test]
fn from_utc_rejects_bad_fields() {
    assert!(Timestamp::from_utc(2023, 2, 29, 0, 0, 0).is_err());
    assert!(Timestamp::from_utc(1900, 2, 29, 0, 0, 0).is_err());
    assert!(Timestamp::from_utc(2024, 13, 1, 0, 0, 0).is_err());
    assert!(Timestamp::from_utc(2024, 0, 1, 0, 0, 0).is_err());
    assert!(Timestamp::from_utc(2024, 4, 31, 0, 0, 0).is_err());
    assert!(Timestamp::from_utc(2024, 1, 1, 24, 0, 0).is_err());
    assert!(Timestamp::from_utc(2024, 1, 1, 0, 60, 0).is_err());
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_utc_form() {
    let ts: Timestamp = "20030730T130036Z".parse().unwrap();
    assert_eq!(ts.unix_seconds(), 1_059_570_036);
}

#[test]
fn parse_floating_form_as_utc() {
    let floating: Timestamp = "20030730T130036".parse().unwrap();
    let utc: Timestamp = "20030730T130036Z".parse().unwrap();
    assert_eq!(floating, utc);
}

#[test]
fn parse_trims_whitespace() {
    let ts = Timestamp::parse_ical("  20240101T000000Z\r\n").unwrap();
    assert_eq!(ts.unix_seconds(), 1_704_067_200);
}

#[test]
fn parse_rejects_malformed() {
    for bad in [
        "",
        "2003",
        "20030730",
        "20030730 130036Z",
        "2003-07-30T13:00:36Z",
        "2003073OT130036Z",
        "20030730T1300+6Z",
        "20031330T130036Z",
    ] {
        let err = Timestamp::parse_ical(bad).unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp(_)), "accepted {bad:?}");
    }
}

// ── Display ──────────────────────────────────────────────────────

#[test]
fn display_is_ical_utc() {
    let ts = Timestamp::from_unix(1_059_570_036).unwrap();
    assert_eq!(ts.to_string(), "20030730T130036Z");
}

#[test]
fn display_before_epoch() {
    assert_eq!(Timestamp::from_unix(-1).unwrap().to_string(), "19691231T235959Z");
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn ordering_follows_seconds() {
    let a = Timestamp::from_unix(100).unwrap();
    let b = Timestamp::from_unix(200).unwrap();
    assert!(a < b);
    assert!(a.is_before(&b));
    assert!(b.is_after(&a));
}

#[test]
fn equal_timestamps_are_neither_before_nor_after() {
    let a = Timestamp::from_unix(5).unwrap();
    let b = Timestamp::from_unix(5).unwrap();
    assert_eq!(a, b);
    assert!(!a.is_before(&b));
    assert!(!a.is_after(&b));
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_ical_string() {
    let ts = Timestamp::from_unix(1_704_067_200).unwrap();
    let json = serde_json::to_string(&ts).unwrap();
    assert_eq!(json, "\"20240101T000000Z\"");
}

#[test]
fn deserialize_rejects_garbage() {
    let result: Result<Timestamp, _> = serde_json::from_str("\"yesterday\"");
    assert!(result.is_err());
}

// ── Representable range ──────────────────────────────────────────

#[test]
fn range_bounds_print_four_digit_years() {
    let min = Timestamp::from_unix(Timestamp::MIN_UNIX).unwrap();
    let max = Timestamp::from_unix(Timestamp::MAX_UNIX).unwrap();
    assert_eq!(min.to_string(), "00000101T000000Z");
    assert_eq!(max.to_string(), "99991231T235959Z");
    assert_eq!(min.to_string().parse::<Timestamp>().unwrap(), min);
    assert_eq!(max.to_string().parse::<Timestamp>().unwrap(), max);
}

#[test]
fn from_unix_rejects_years_without_text_form() {
    for secs in [
        Timestamp::MAX_UNIX + 1,
        Timestamp::MIN_UNIX - 1,
        i64::MAX,
        i64::MIN,
    ] {
        let err = Timestamp::from_unix(secs).unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp(_)), "accepted {secs}");
    }
}

// ── Leap seconds ─────────────────────────────────────────────────

#[test]
fn leap_second_survives_text_round_trip() {
    let leap: Timestamp = "20031231T235960Z".parse().unwrap();
    assert_eq!(leap.to_string(), "20031231T235960Z");

    let before: Timestamp = "20031231T235959Z".parse().unwrap();
    let after: Timestamp = "20040101T000000Z".parse().unwrap();
    assert!(before < leap);
    assert!(leap < after);
    assert_eq!(leap.unix_seconds(), before.unix_seconds());
}

#[test]
fn from_utc_accepts_leap_second() {
    let leap = Timestamp::from_utc(2003, 12, 31, 23, 59, 60).unwrap();
    assert_eq!(leap, "20031231T235960Z".parse().unwrap());
}

proptest! {
    #[test]
    fn every_accepted_instant_round_trips_as_text(
        secs in Timestamp::MIN_UNIX..=Timestamp::MAX_UNIX,
    ) {
        let ts = Timestamp::from_unix(secs).unwrap();
        let parsed: Timestamp = ts.to_string().parse().unwrap();
        prop_assert_eq!(parsed, ts);
        prop_assert_eq!(parsed.unix_seconds(), secs);
    }

    #[test]
    fn every_accepted_instant_round_trips_through_json(
        secs in Timestamp::MIN_UNIX..=Timestamp::MAX_UNIX,
    ) {
        let ts = Timestamp::from_unix(secs).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, ts);
    }

    #[test]
    fn order_matches_text_order(
        a in Timestamp::MIN_UNIX..=Timestamp::MAX_UNIX,
        b in Timestamp::MIN_UNIX..=Timestamp::MAX_UNIX,
    ) {
        let ta = Timestamp::from_unix(a).unwrap();
        let tb = Timestamp::from_unix(b).unwrap();
        prop_assert_eq!(ta.cmp(&tb), ta.to_string().cmp(&tb.to_string()));
    }
}
