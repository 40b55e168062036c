//! # zm-core
//!
//! Core types, the clock abstraction, and error definitions for zmanim-rs.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: type aliases, the error hierarchy, and
//! the [`Clock`] trait that keeps "what time is it now?" out of the
//! computational core.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Wall-clock access behind a trait ([`Clock`], [`SystemClock`], [`FixedClock`]).
pub mod clock;

/// Error types and the `ensure!` / `fail!` / `ensure_post!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// An angle expressed in decimal degrees.
pub type Degrees = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, Result};
