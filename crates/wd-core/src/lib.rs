//! # wd-core
//!
//! Core error definitions and input helpers for workdays.
//!
//! This crate provides the pieces shared by every other crate in the
//! workspace: the error enum with its `ensure!` macro, and the
//! parsers and formatters used when turning user input into calendar values.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Parsing and formatting utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed day count (differences between dates, working-day offsets).
pub type Days = i32;

/// Non-negative count of whole weeks.
pub type Weeks = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
