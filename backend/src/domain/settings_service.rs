use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use crate::domain::commands::settings::{UpdateSettingsCommand, UpdateSettingsResult};
use crate::domain::models::settings::Settings;
use crate::storage::settings_source::CachedSettingsSource;

/// Facade over the cached settings source.
///
/// Reads hand out the source's stream and never block; writes run on the
/// async executor and suspend the caller until the persistent write has been
/// acknowledged.
#[derive(Clone)]
pub struct SettingsService {
    source: Arc<CachedSettingsSource>,
}

impl SettingsService {
    /// Create a new SettingsService
    pub fn new(source: Arc<CachedSettingsSource>) -> Self {
        Self { source }
    }

    /// Subscribe to the current settings value
    pub fn settings(&self) -> watch::Receiver<Option<Settings>> {
        self.source.settings()
    }

    /// Replace the settings record
    pub async fn update_settings(
        &self,
        command: UpdateSettingsCommand,
    ) -> Result<UpdateSettingsResult> {
        info!("Updating settings: {:?}", command.settings);

        self.source.update_settings(command.settings).await?;

        Ok(UpdateSettingsResult { settings: command.settings })
    }
}
