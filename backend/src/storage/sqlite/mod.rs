//! # SQLite Storage Module
//!
//! SQLite-backed implementations of the storage traits. Each repository
//! owns a latest-value channel and republishes a fresh snapshot after every
//! write, so domain-layer subscribers never re-query.

pub mod connection;
pub mod dog_repository;
pub mod settings_repository;

pub use connection::DbConnection;
pub use dog_repository::DogRepository;
pub use settings_repository::SettingsRepository;
