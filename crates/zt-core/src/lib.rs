//! # zt-core: Temporal Value Binding
//!
//! The temporal value library that the validators in `zt-temporal` check
//! against. It defines the eight temporal kinds, one Rust type per kind,
//! and the canonical string format each type parses from and renders to.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One type per kind.** `Instant`, `PlainDate`, `PlainTime`,
//!    `PlainDateTime`, `ZonedDateTime`, `Duration`, `TimeZone`, `Calendar`.
//!    Instance checks are nominal, never structural.
//!
//! 2. **Single `TemporalKind` enum.** One definition, 8 variants, exhaustive
//!    `match` everywhere. Adding a kind forces every consumer to handle it.
//!
//! 3. **Canonical strings are the only text format.** `Display` and
//!    `FromStr` are inverse for every type, and serde goes through them.
//!    Parsing is a pure function of the text: no ambient locale, and time
//!    zone lookups use the tz database bundled into the binary.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `zt-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod calendar;
pub mod error;
pub mod interop;
pub mod kind;
pub mod temporal;
pub mod zone;

// Re-export primary types for ergonomic imports.
pub use calendar::Calendar;
pub use error::TemporalError;
pub use kind::{TemporalKind, TEMPORAL_KIND_COUNT};
pub use temporal::{
    Duration, Instant, PlainDate, PlainDateTime, PlainTime, TemporalType, ZonedDateTime,
};
pub use zone::TimeZone;
