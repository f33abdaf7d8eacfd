//! Per-kind behaviour of the sixteen validators, in both the functional
//! form and the augmented-instance form.

mod common;

use zt_core::TemporalKind;
use zt_schema::{IssueCode, Schema, Value, Zod};
use zt_temporal::{
    coercing_constructor, strict_constructor, with_temporal, TemporalErrorMessage,
};

macro_rules! kind_suite {
    ($suite:ident, $ty:ident, $strict:ident, $coerced:ident) => {
        mod $suite {
            use super::*;
            use zt_core::$ty;
            use zt_temporal::{$coerced, $strict};

            const KIND: TemporalKind = TemporalKind::$ty;

            fn sample() -> Value {
                Value::opaque(common::canonical(KIND).parse::<$ty>().unwrap())
            }

            fn custom() -> Option<TemporalErrorMessage> {
                Some(TemporalErrorMessage::new("X"))
            }

            // ---- strict ----

            #[test]
            fn test_strict_returns_same_instance() {
                let input = sample();
                let output = $strict(None).parse(&input).unwrap();
                assert!(output.same_instance(&input));
            }

            #[test]
            fn test_strict_rejects_invalid_text() {
                assert!($strict(None).parse(&Value::from("invalid")).is_err());
            }

            #[test]
            fn test_strict_rejects_canonical_text() {
                let text = Value::from(common::canonical(KIND));
                assert!($strict(None).parse(&text).is_err());
            }

            #[test]
            fn test_strict_default_message() {
                let err = $strict(None).parse(&Value::from("invalid")).unwrap_err();
                assert!(
                    err.to_string().contains(&format!("Invalid Temporal.{}", KIND.name())),
                    "{err}"
                );
            }

            #[test]
            fn test_strict_custom_message() {
                let err = $strict(custom()).parse(&Value::from("invalid")).unwrap_err();
                assert_eq!(err.to_string(), "X");
            }

            // ---- coercing ----

            #[test]
            fn test_coerced_returns_same_instance() {
                let input = sample();
                let output = $coerced(None).parse(&input).unwrap();
                assert!(output.same_instance(&input));
            }

            #[test]
            fn test_coerced_parses_canonical_text() {
                let text = common::canonical(KIND);
                let output = $coerced(None).parse(&Value::from(text)).unwrap();
                let parsed = output.downcast_ref::<$ty>().unwrap();
                assert_eq!(parsed.to_string(), text);
            }

            #[test]
            fn test_coerced_rejects_invalid_text() {
                let err = $coerced(None).parse(&Value::from("invalid")).unwrap_err();
                assert_eq!(err.issues()[0].code, IssueCode::Transform);
            }

            #[test]
            fn test_coerced_default_message_names_input() {
                let err = $coerced(None).parse(&Value::from("not-a-date")).unwrap_err();
                assert_eq!(
                    err.to_string(),
                    format!("Invalid Temporal.{} string: not-a-date", KIND.name())
                );
            }

            #[test]
            fn test_coerced_custom_message_on_both_paths() {
                let schema = $coerced(custom());
                assert_eq!(schema.parse(&Value::from("not-a-date")).unwrap_err().to_string(), "X");
                assert_eq!(schema.parse(&Value::Number(1.0)).unwrap_err().to_string(), "X");
            }

            #[test]
            fn test_coerced_rejects_non_text() {
                let err = $coerced(None).parse(&Value::Bool(true)).unwrap_err();
                assert_eq!(err.issues()[0].code, IssueCode::Custom);
                assert_eq!(err.to_string(), format!("Invalid Temporal.{}", KIND.name()));
            }

            // ---- augmented instance ----

            #[test]
            fn test_augmented_members() {
                let z = with_temporal(&Zod::new());
                let input = sample();
                assert!(z.$strict(None).parse(&input).unwrap().same_instance(&input));
                assert!(z.coerce.$strict(None).parse(&input).unwrap().same_instance(&input));

                let text = Value::from(common::canonical(KIND));
                assert!(z.$strict(None).parse(&text).is_err());
                assert!(z.coerce.$strict(None).parse(&text).unwrap().is::<$ty>());
                assert_eq!(
                    z.coerce.$strict(custom()).parse(&Value::from("invalid")).unwrap_err().to_string(),
                    "X"
                );
            }

            #[test]
            fn test_resolve_by_member_name() {
                let z = with_temporal(&Zod::new());
                let text = Value::from(common::canonical(KIND));
                let strict = z.resolve(KIND.member_name()).unwrap()(None);
                let coercing = z.coerce.resolve(KIND.member_name()).unwrap()(None);
                assert!(strict.parse(&text).is_err());
                assert!(coercing.parse(&text).unwrap().is::<$ty>());
            }
        }
    };
}

kind_suite!(instant, Instant, temporal_instant, coerced_temporal_instant);
kind_suite!(plain_date, PlainDate, temporal_plain_date, coerced_temporal_plain_date);
kind_suite!(plain_time, PlainTime, temporal_plain_time, coerced_temporal_plain_time);
kind_suite!(
    plain_date_time,
    PlainDateTime,
    temporal_plain_date_time,
    coerced_temporal_plain_date_time
);
kind_suite!(
    zoned_date_time,
    ZonedDateTime,
    temporal_zoned_date_time,
    coerced_temporal_zoned_date_time
);
kind_suite!(duration, Duration, temporal_duration, coerced_temporal_duration);
kind_suite!(time_zone, TimeZone, temporal_time_zone, coerced_temporal_time_zone);
kind_suite!(calendar, Calendar, temporal_calendar, coerced_temporal_calendar);

// ---- cross-kind ----

#[test]
fn test_no_validator_accepts_another_kinds_instance() {
    for owner in TemporalKind::ALL {
        let value = common::instance(owner);
        for kind in TemporalKind::ALL {
            let strict = strict_constructor(kind)(None);
            let coercing = coercing_constructor(kind)(None);
            assert_eq!(strict.parse(&value).is_ok(), kind == owner, "{kind} strict on {owner}");
            assert_eq!(coercing.parse(&value).is_ok(), kind == owner, "{kind} coerced on {owner}");
        }
    }
}

#[test]
fn test_constructors_do_not_share_messages() {
    for kind in TemporalKind::ALL {
        let first = strict_constructor(kind)(Some(TemporalErrorMessage::new("first")));
        let second = strict_constructor(kind)(None);
        assert_eq!(first.parse(&Value::Null).unwrap_err().to_string(), "first");
        assert_eq!(
            second.parse(&Value::Null).unwrap_err().to_string(),
            format!("Invalid {}", kind.qualified_name())
        );
    }
}

#[test]
fn test_coerced_time_zone_rejects_non_ascii_offsets() {
    let schema = zt_temporal::coerced_temporal_time_zone(None);
    for text in ["+0é0", "-é:00", "2024-02-09T12:00:00+01:00[+0é0]"] {
        let err = schema.parse(&Value::from(text)).unwrap_err();
        assert_eq!(err.issues()[0].code, IssueCode::Transform, "{text}");
        assert_eq!(err.to_string(), format!("Invalid Temporal.TimeZone string: {text}"));
    }
}

#[test]
fn test_coerced_calendar_rejects_malformed_annotations() {
    let schema = zt_temporal::coerced_temporal_calendar(None);
    for text in ["2024-02-09[u-ca=hebrew", "2024-02-09[garbage"] {
        let err = schema.parse(&Value::from(text)).unwrap_err();
        assert_eq!(err.issues()[0].code, IssueCode::Transform, "{text}");
    }
    let out = schema.parse(&Value::from("2024-02-09[u-ca=hebrew]")).unwrap();
    assert_eq!(out.downcast_ref::<zt_core::Calendar>(), Some(&zt_core::Calendar::Hebrew));
}

#[test]
fn test_coerced_time_zone_from_exact_date_time() {
    let schema = zt_temporal::coerced_temporal_time_zone(None);
    let out = schema.parse(&Value::from("2024-02-09T12:00:00+01:00")).unwrap();
    assert_eq!(out.downcast_ref::<zt_core::TimeZone>().unwrap().to_string(), "+01:00");
    let out = schema.parse(&Value::from("2024-02-09T12:00:00Z")).unwrap();
    assert_eq!(out.downcast_ref::<zt_core::TimeZone>().unwrap().to_string(), "UTC");
}
