//! # zt-temporal: Temporal Validators for the Zod Host
//!
//! Strict and coercing validators for the eight temporal kinds defined in
//! `zt-core`, built on the host contract in `zt-schema`, plus a way to
//! attach all sixteen of them to a host namespace without modifying it.
//!
//! ## Architecture
//!
//! ```text
//! registry ──► strict ──► coerce ──► catalog ──► extend
//!  (kinds)    (custom)  (preprocess)  (16 fns)   (with_temporal)
//! ```
//!
//! - [`registry`]: per-kind predicate, parser and messages.
//! - [`strict`]: predicate plus message becomes a host `custom` schema.
//! - [`coerce`]: text parsing composed in front of the strict schema.
//! - [`catalog`]: the named constructors and runtime selection by kind.
//! - [`extend`]: [`with_temporal`] and the augmented namespaces.
//!
//! ## Usage
//!
//! ```
//! use zt_schema::{Schema, Value, Zod};
//! use zt_temporal::{with_temporal, TemporalErrorMessage};
//!
//! let z = with_temporal(&Zod::new());
//! let event = z.object()
//!     .field("at", z.coerce.temporal_instant(None))
//!     .field("day", z.temporal_plain_date(Some(TemporalErrorMessage::new("Bad day"))).optional());
//!
//! let out = event.parse(&Value::from(serde_json::json!({"at": "2024-02-09T12:00:00Z"}))).unwrap();
//! assert!(out.get("at").unwrap().is::<zt_core::Instant>());
//! ```
//!
//! ## Failure Modes
//!
//! A temporal validator either sees the wrong type or sees text it cannot
//! parse. The two surface as distinct host issue codes and are classified
//! by [`TemporalFailure`].
//!
//! ## Crate Policy
//!
//! - Validators are immutable after construction and `Send + Sync`.
//! - Constructors never share state; message overrides are per call.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod catalog;
pub mod coerce;
pub mod error;
pub mod extend;
pub mod messages;
pub mod registry;
pub mod strict;

// Re-export primary types for ergonomic imports.
pub use catalog::{
    coerced, coerced_temporal_calendar, coerced_temporal_duration, coerced_temporal_instant,
    coerced_temporal_plain_date, coerced_temporal_plain_date_time, coerced_temporal_plain_time,
    coerced_temporal_time_zone, coerced_temporal_zoned_date_time, coercing_constructor, strict,
    strict_constructor, temporal_calendar, temporal_duration, temporal_instant,
    temporal_plain_date, temporal_plain_date_time, temporal_plain_time, temporal_time_zone,
    temporal_zoned_date_time, SchemaConstructor,
};
pub use coerce::{make_coercing_schema, CoercingSchema};
pub use error::TemporalFailure;
pub use extend::{with_temporal, EmptyCoerce, TemporalCoerce, TemporalZod, ValidationHost};
pub use messages::TemporalErrorMessage;
pub use registry::{descriptor, KindDescriptor, REGISTRY};
pub use strict::{make_strict_schema, StrictSchema};
