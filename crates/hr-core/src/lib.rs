//! # hr-core
//!
//! Core types, error definitions, and configuration for hrleave.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace – primitive aliases, the error hierarchy with its `ensure!` /
//! `fail!` macros, lenient date-string parsers, and the injected
//! [`CalendarConfig`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Calendar configuration (holiday list, supported years).
pub mod config;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Date-string parsers for user-entered and imported data.
pub mod parsers;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year (e.g. `2025`).
pub type Year = i32;

/// Count of days (calendar or working).
pub type DayCount = u32;

/// Alias used for row counts / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::CalendarConfig;
pub use errors::{Error, Result};
