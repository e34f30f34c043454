//! # Flexible Scalar Test Suite
//!
//! Quoted and unquoted spellings of the same scalar must decode identically.

use resellerclub::core::flex::{FlexBool, FlexFloat, FlexInt, FlexTime, decode_timestamp};
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn test_bool_plain_and_quoted() {
    assert_eq!(serde_json::from_str::<FlexBool>("true").unwrap(), FlexBool(true));
    assert_eq!(serde_json::from_str::<FlexBool>("\"true\"").unwrap(), FlexBool(true));
    assert_eq!(serde_json::from_str::<FlexBool>("\"false\"").unwrap(), FlexBool(false));
}

#[test]
fn test_int_plain_and_quoted() {
    assert_eq!(serde_json::from_str::<FlexInt>("42").unwrap(), FlexInt(42));
    assert_eq!(serde_json::from_str::<FlexInt>("\"42\"").unwrap(), FlexInt(42));
    assert_eq!(serde_json::from_str::<FlexInt>("\"-7\"").unwrap(), FlexInt(-7));
}

#[test]
fn test_float_plain_and_quoted() {
    assert_eq!(serde_json::from_str::<FlexFloat>("10.25").unwrap(), FlexFloat(10.25));
    assert_eq!(serde_json::from_str::<FlexFloat>("\"10.25\"").unwrap(), FlexFloat(10.25));
    // integers are valid floats
    assert_eq!(serde_json::from_str::<FlexFloat>("\"-10\"").unwrap(), FlexFloat(-10.0));
}

#[test]
fn test_null_is_zero_value() {
    assert_eq!(serde_json::from_str::<FlexBool>("null").unwrap(), FlexBool(false));
    assert_eq!(serde_json::from_str::<FlexInt>("null").unwrap(), FlexInt(0));
    assert_eq!(serde_json::from_str::<FlexTime>("null").unwrap().unix(), 0);
}

#[test]
fn test_unparseable_scalars_fail() {
    assert!(serde_json::from_str::<FlexInt>("\"abc\"").is_err());
    assert!(serde_json::from_str::<FlexInt>("\"\"").is_err());
    assert!(serde_json::from_str::<FlexInt>("1.5").is_err());
    assert!(serde_json::from_str::<FlexBool>("\"yes\"").is_err());
    assert!(serde_json::from_str::<FlexFloat>("[1]").is_err());
}

#[test]
fn test_time_epoch_and_rfc3339_agree() {
    let expected = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();

    let plain: FlexTime = serde_json::from_str("1700000000").unwrap();
    let quoted: FlexTime = serde_json::from_str("\"1700000000\"").unwrap();
    let rfc: FlexTime = serde_json::from_str("\"2023-11-14T22:13:20Z\"").unwrap();

    assert_eq!(plain.0, expected);
    assert_eq!(quoted, plain);
    assert_eq!(rfc, plain);
}

#[test]
fn test_time_offset_layout() {
    let expected = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();

    let hours_only = decode_timestamp(json!("2023-11-14 23:13:20.000+01")).unwrap();
    let with_minutes = decode_timestamp(json!("2023-11-15 03:43:20+05:30")).unwrap();
    let no_fraction = decode_timestamp(json!("2023-11-14 15:13:20-07")).unwrap();

    assert_eq!(hours_only, expected);
    assert_eq!(with_minutes, expected);
    assert_eq!(no_fraction, expected);
}

#[test]
fn test_time_rejects_garbage() {
    assert!(decode_timestamp(json!("yesterday")).is_err());
    assert!(decode_timestamp(json!(true)).is_err());
    assert!(decode_timestamp(json!(1.5)).is_err());
}

#[test]
fn test_flex_fields_inside_struct() {
    #[derive(serde::Deserialize)]
    struct Row {
        id: FlexInt,
        active: FlexBool,
        cost: FlexFloat,
        created: FlexTime,
    }

    let a: Row = serde_json::from_value(json!({
        "id": 9, "active": true, "cost": 1.5, "created": 1700000000
    }))
    .unwrap();
    let b: Row = serde_json::from_value(json!({
        "id": "9", "active": "true", "cost": "1.5", "created": "2023-11-14T22:13:20+00:00"
    }))
    .unwrap();

    assert_eq!(a.id, b.id);
    assert_eq!(a.active, b.active);
    assert_eq!(a.cost, b.cost);
    assert_eq!(a.created, b.created);
    assert_eq!(*a.id + 1, 10);
}
