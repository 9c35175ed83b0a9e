#![warn(missing_docs, unreachable_pub, unused_crate_dependencies)]
#![deny(unused_must_use, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! MEV bundle wire-format type bindings
//!
//! Strongly typed models for `mev_sendBundle`-style bundle submissions:
//! decoding validates every field (hex integers, byte strings, checksummed
//! addresses, percent ranges) and fails atomically with the path of the
//! offending field; encoding reproduces the exact wire format, camelCase
//! aliases and all.
//!
//! All operations are pure value transformations. Types are plain data and
//! can be shared freely across threads; the chainable [`Bundle`] builders
//! consume and return the bundle by value, so there is no hidden aliasing.

/// hex and address codecs
pub mod codec;

/// decode errors
mod error;
pub use error::*;

/// type bindings
mod types;
pub use types::*;
