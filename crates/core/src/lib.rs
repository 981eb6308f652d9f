//! Emberlance domain layer.
//!
//! Content contracts (contact messages, tracks, videos), the fixed set of
//! collections they live in, and the shared error type. Nothing in this
//! crate performs I/O.

pub mod collection;
pub mod content;
pub mod error;
pub mod types;
