//! Functional core for the dedications service.
//!
//! Pure domain types, request validation and the storage contract. Nothing in
//! this crate performs I/O.

pub mod entry;
pub mod serde;
pub mod storage;
