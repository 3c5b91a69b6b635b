//! Deterministic, pure logic for building and presenting env records.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod confirm;
pub mod entries;
pub mod mask;
