//! # Storage Module
//!
//! Persistence layer for dogs and settings: the storage traits the domain
//! layer programs against, the SQLite implementation, and the cached
//! settings source that keeps the in-memory snapshot in sync with the
//! persistent row.

pub mod settings_source;
pub mod sqlite;
pub mod traits;

pub use settings_source::CachedSettingsSource;
pub use sqlite::connection::DbConnection;
pub use traits::{DogStore, SettingsStore, StoreError};
