//! `criteria-core`: record and value primitives.
//!
//! This crate contains **pure** building blocks (no IO, no HTTP): the scalar
//! value model with its loose comparison, flat records, the legacy casts used
//! to read raw request values, and the caller-facing error type.

pub mod cast;
pub mod error;
pub mod record;
pub mod scalar;

pub use error::{CriteriaError, CriteriaResult};
pub use record::Record;
pub use scalar::{Scalar, cmp_fields};
