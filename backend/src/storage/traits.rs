//! # Storage Traits
//!
//! Defines the storage abstraction traits that allow different storage
//! backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::models::dog::Dog;
use crate::domain::models::settings::Settings;

/// Raised by storage lookups that require the record to exist.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Dog not found: {0}")]
    DogNotFound(String),
}

/// Trait defining the interface for settings storage operations.
///
/// The store holds at most one settings row under a fixed key; inserts are
/// ignored once the row exists and updates replace the whole row.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Subscribe to the current settings row.
    ///
    /// The stream carries the latest full snapshot and emits a fresh one
    /// whenever the row changes; `None` until a row exists.
    fn stream_current(&self) -> watch::Receiver<Option<Settings>>;

    /// Insert the settings row if no row exists yet
    async fn insert_if_absent(&self, settings: &Settings) -> Result<()>;

    /// Replace the settings row
    async fn update(&self, settings: &Settings) -> Result<()>;

    /// Delete the settings row
    async fn delete(&self) -> Result<()>;
}

/// Trait defining the interface for dog storage operations.
#[async_trait]
pub trait DogStore: Send + Sync {
    /// Subscribe to the full list of dogs.
    ///
    /// Emits a fresh snapshot whenever any dog row changes.
    fn stream_all(&self) -> watch::Receiver<Vec<Dog>>;

    /// Retrieve a dog by ID, failing with [`StoreError::DogNotFound`] on a miss
    async fn find_by_id(&self, dog_id: &str) -> Result<Dog>;

    /// Store a new dog; an existing dog with the same ID is left unchanged
    async fn insert_if_absent(&self, dog: &Dog) -> Result<()>;

    /// Update an existing dog
    async fn update(&self, dog: &Dog) -> Result<()>;

    /// Delete a dog by ID
    async fn delete(&self, dog_id: &str) -> Result<()>;
}
