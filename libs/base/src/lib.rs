//! # keel-base
//!
//! Primitive value types shared across keel.
//!
//! ## Guid
//!
//! A 128-bit random identifier stored as two `u64` words. The canonical text
//! form is 36 characters of uppercase hex split 8-4-4-4-12 by dashes:
//!
//! - `01234567-89AB-CDEF-FEDC-BA9876543210`
//!
//! The all-zero GUID is reserved as the "unset" value. Text that fails
//! validation decodes to it on the lenient path ([`Guid::from_str_lossy`]);
//! [`Guid::parse`] reports the failure instead.
//!
//! ## Timestamp
//!
//! Microseconds since the Unix epoch in a single `i64`. Zero doubles as the
//! invalid timestamp, so it renders exactly like the epoch.
//!
//! Neither type does anything beyond construct, copy, compare and render.

mod error;
mod guid;
mod timestamp;

pub use error::GuidError;
pub use guid::Guid;
pub use timestamp::Timestamp;
