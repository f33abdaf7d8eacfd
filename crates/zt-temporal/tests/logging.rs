//! Structured events emitted by the validators.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use zt_schema::{Schema, Value, Zod};
use zt_temporal::{coerced_temporal_plain_date, with_temporal};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn text_subscriber(capture: &Capture, directive: &str) -> impl tracing::Subscriber + Send + Sync {
    let writer = capture.clone();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish()
}

#[test]
fn test_coercion_failure_logged_at_debug() {
    let capture = Capture::default();
    tracing::subscriber::with_default(text_subscriber(&capture, "zt_temporal=debug"), || {
        let _ = coerced_temporal_plain_date(None).parse(&Value::from("not-a-date"));
    });
    let logs = capture.contents();
    assert!(logs.contains("temporal coercion failed"), "{logs}");
    assert!(logs.contains("not-a-date"), "{logs}");
    assert!(logs.contains("Temporal.PlainDate"), "{logs}");
}

#[test]
fn test_successful_coercion_is_silent() {
    let capture = Capture::default();
    tracing::subscriber::with_default(text_subscriber(&capture, "zt_temporal=trace"), || {
        let _ = coerced_temporal_plain_date(None).parse(&Value::from("2024-02-09"));
    });
    assert!(capture.contents().is_empty());
}

#[test]
fn test_info_level_hides_coercion_failures() {
    let capture = Capture::default();
    tracing::subscriber::with_default(text_subscriber(&capture, "info"), || {
        let _ = coerced_temporal_plain_date(None).parse(&Value::from("not-a-date"));
    });
    assert!(capture.contents().is_empty());
}

#[test]
fn test_extension_and_resolution_traced() {
    let capture = Capture::default();
    tracing::subscriber::with_default(text_subscriber(&capture, "zt_temporal=trace"), || {
        let z = with_temporal(&Zod::new());
        let _ = z.resolve("temporalInstant");
    });
    let logs = capture.contents();
    assert!(logs.contains("building temporal-augmented instance"), "{logs}");
    assert!(logs.contains("resolving temporal member"), "{logs}");
}

#[test]
fn test_json_events_carry_fields() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new("zt_temporal=debug"))
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let _ = coerced_temporal_plain_date(None).parse(&Value::from("31/02"));
    });

    let logs = capture.contents();
    let event: serde_json::Value = serde_json::from_str(logs.lines().next().unwrap()).unwrap();
    assert_eq!(event["level"], "DEBUG");
    assert_eq!(event["fields"]["message"], "temporal coercion failed");
    assert_eq!(event["fields"]["kind"], "Temporal.PlainDate");
    assert_eq!(event["fields"]["input"], "31/02");
}
