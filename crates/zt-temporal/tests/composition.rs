//! Temporal validators composed under the host's object, optional and
//! nullable wrappers.

mod common;

use zt_core::{Instant, PlainDate, TemporalKind, ZonedDateTime};
use zt_schema::{IssueCode, PathSegment, Schema, Value, ZObject, Zod};
use zt_temporal::{
    coerced_temporal_zoned_date_time, temporal_instant, temporal_plain_date, temporal_plain_time,
    with_temporal,
};

fn event_schema() -> ZObject {
    zt_schema::object()
        .field("instant", temporal_instant(None))
        .field("date", temporal_plain_date(None).optional())
        .field("time", temporal_plain_time(None).nullable())
        .field("zoned", coerced_temporal_zoned_date_time(None))
}

fn full_event() -> Value {
    common::object([
        ("instant", common::instance(TemporalKind::Instant)),
        ("date", common::instance(TemporalKind::PlainDate)),
        ("time", common::instance(TemporalKind::PlainTime)),
        ("zoned", common::instance(TemporalKind::ZonedDateTime)),
    ])
}

#[test]
fn test_accepts_fully_populated_object() {
    let input = full_event();
    let output = event_schema().parse(&input).unwrap();
    for key in ["instant", "date", "time", "zoned"] {
        assert!(output.get(key).unwrap().same_instance(input.get(key).unwrap()), "{key}");
    }
}

#[test]
fn test_optional_field_may_be_omitted() {
    let input = common::object([
        ("instant", common::instance(TemporalKind::Instant)),
        ("time", common::instance(TemporalKind::PlainTime)),
        ("zoned", common::instance(TemporalKind::ZonedDateTime)),
    ]);
    let output = event_schema().parse(&input).unwrap();
    assert!(output.get("date").is_none());
}

#[test]
fn test_nullable_null_and_coerced_text() {
    let zoned_text = common::canonical(TemporalKind::ZonedDateTime);
    let input = common::object([
        ("instant", common::instance(TemporalKind::Instant)),
        ("time", Value::Null),
        ("zoned", Value::from(zoned_text)),
    ]);
    let output = event_schema().parse(&input).unwrap();
    assert_eq!(output.get("time"), Some(&Value::Null));
    let zoned = output.get("zoned").unwrap().downcast_ref::<ZonedDateTime>().unwrap();
    assert_eq!(zoned.to_string(), zoned_text);
}

#[test]
fn test_required_field_missing() {
    let input = common::object([
        ("time", Value::Null),
        ("zoned", common::instance(TemporalKind::ZonedDateTime)),
    ]);
    let err = event_schema().parse(&input).unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.issues()[0].code, IssueCode::Required);
    assert_eq!(err.issues()[0].path, vec![PathSegment::Key("instant".into())]);
}

#[test]
fn test_issues_carry_paths_and_messages() {
    let input = common::object([
        ("instant", Value::from("2024-02-09T12:00:00Z")),
        ("date", Value::Null),
        ("time", Value::Null),
        ("zoned", Value::from("yesterday")),
    ]);
    let err = event_schema().parse(&input).unwrap_err();
    let rendered: Vec<String> = err.issues().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "instant: Invalid Temporal.Instant".to_string(),
            "date: Invalid Temporal.PlainDate".to_string(),
            "zoned: Invalid Temporal.ZonedDateTime string: yesterday".to_string(),
        ]
    );
    assert_eq!(err.issues()[2].code, IssueCode::Transform);
}

#[test]
fn test_nested_objects_through_augmented_instance() {
    let z = with_temporal(&Zod::new());
    let schema = z.object().field(
        "booking",
        z.object()
            .field("name", z.string())
            .field("from", z.coerce.temporal_plain_date(None))
            .field("created", z.temporal_instant(None)),
    );
    let created: Instant = "2024-01-01T00:00:00Z".parse().unwrap();
    let input = common::object([(
        "booking",
        common::object([
            ("name", Value::from("room 4")),
            ("from", Value::from("2024-02-09")),
            ("created", Value::opaque(created)),
        ]),
    )]);

    let output = schema.parse(&input).unwrap();
    let booking = output.get("booking").unwrap();
    assert_eq!(
        booking.get("from").unwrap().downcast_ref::<PlainDate>(),
        Some(&PlainDate::from_ymd(2024, 2, 9).unwrap())
    );
    assert_eq!(booking.get("created").unwrap().downcast_ref::<Instant>(), Some(&created));
}

#[test]
fn test_boxed_validators_in_shared_schema() {
    let schema = std::sync::Arc::new(event_schema());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = schema.clone();
            std::thread::spawn(move || schema.parse(&full_event()).is_ok())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_safe_parse_reports_failure() {
    let result = event_schema().safe_parse(&Value::from("not an object"));
    assert!(!result.success());
    assert!(result.data().is_none());
    assert!(result.error().is_some());
}

#[test]
fn test_optional_nullable_in_either_order_allows_absence() {
    let schema = zt_schema::object()
        .field("first", temporal_instant(None).optional().nullable())
        .field("second", temporal_instant(None).nullable().optional());

    let empty = common::object([]);
    assert_eq!(schema.parse(&empty).unwrap(), empty);

    let nulls = common::object([("first", Value::Null), ("second", Value::Null)]);
    assert_eq!(schema.parse(&nulls).unwrap(), nulls);

    let text = common::object([("first", Value::from("2024-02-09T12:00:00Z"))]);
    let err = schema.parse(&text).unwrap_err();
    assert_eq!(err.issues()[0].to_string(), "first: Invalid Temporal.Instant");
}
