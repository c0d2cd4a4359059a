//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `dedications_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
