use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::Row;
use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::models::settings::{DateFormat, Settings, Theme, WeightUnit};
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::SettingsStore;

/// Repository for the single settings row.
///
/// The row lives under the fixed key `id = 1`; writes replace it in full and
/// the stream republishes the row after every change.
#[derive(Clone)]
pub struct SettingsRepository {
    db: DbConnection,
    publisher: Arc<watch::Sender<Option<Settings>>>,
}

impl SettingsRepository {
    /// Create a new settings repository, loading the current row as the
    /// first published snapshot
    pub async fn new(db: DbConnection) -> Result<Self> {
        let current = Self::load_current(&db).await?;
        let (publisher, _) = watch::channel(current);

        Ok(Self { db, publisher: Arc::new(publisher) })
    }

    /// Query the settings row, decoding the persisted enum indices
    async fn load_current(db: &DbConnection) -> Result<Option<Settings>> {
        let row = sqlx::query(
            r#"
            SELECT weight_unit, date_format, theme
            FROM settings
            WHERE id = 1
            "#,
        )
        .fetch_optional(db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Settings {
                weight_unit: WeightUnit::from_index(r.get("weight_unit"))
                    .context("corrupt settings row")?,
                date_format: DateFormat::from_index(r.get("date_format"))
                    .context("corrupt settings row")?,
                theme: Theme::from_index(r.get("theme")).context("corrupt settings row")?,
            })),
            None => Ok(None),
        }
    }

    /// Re-query and publish the current row
    async fn refresh(&self) -> Result<()> {
        let current = Self::load_current(&self.db).await?;
        self.publisher.send_replace(current);
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    fn stream_current(&self) -> watch::Receiver<Option<Settings>> {
        self.publisher.subscribe()
    }

    async fn insert_if_absent(&self, settings: &Settings) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO settings (id, weight_unit, date_format, theme)
            VALUES (1, ?, ?, ?)
            "#,
        )
        .bind(settings.weight_unit.to_index())
        .bind(settings.date_format.to_index())
        .bind(settings.theme.to_index())
        .execute(self.db.pool())
        .await?;

        self.refresh().await
    }

    async fn update(&self, settings: &Settings) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE settings
            SET weight_unit = ?, date_format = ?, theme = ?
            WHERE id = 1
            "#,
        )
        .bind(settings.weight_unit.to_index())
        .bind(settings.date_format.to_index())
        .bind(settings.theme.to_index())
        .execute(self.db.pool())
        .await?;

        self.refresh().await
    }

    async fn delete(&self) -> Result<()> {
        sqlx::query("DELETE FROM settings WHERE id = 1")
            .execute(self.db.pool())
            .await?;

        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> SettingsRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        SettingsRepository::new(db).await.expect("Failed to create repository")
    }

    fn dark_metric() -> Settings {
        Settings {
            weight_unit: WeightUnit::Kilograms,
            date_format: DateFormat::International,
            theme: Theme::Dark,
        }
    }

    #[tokio::test]
    async fn test_seeded_row_is_visible_at_construction() {
        let repo = setup_test().await;

        let rx = repo.stream_current();
        assert_eq!(*rx.borrow(), Some(Settings::default()));
    }

    #[tokio::test]
    async fn test_update_replaces_row_and_publishes() {
        let repo = setup_test().await;
        let rx = repo.stream_current();

        repo.update(&dark_metric()).await.expect("Failed to update settings");

        assert_eq!(*rx.borrow(), Some(dark_metric()));
    }

    #[tokio::test]
    async fn test_sequential_updates_keep_single_row() {
        let repo = setup_test().await;

        let variants = [
            Settings { theme: Theme::Dark, ..Settings::default() },
            Settings { theme: Theme::Light, ..Settings::default() },
            dark_metric(),
        ];
        for settings in &variants {
            repo.update(settings).await.unwrap();
        }

        let row = sqlx::query("SELECT COUNT(*) AS n FROM settings")
            .fetch_one(repo.db.pool())
            .await
            .unwrap();
        assert_eq!(row.get::<i64, _>("n"), 1);
        assert_eq!(*repo.stream_current().borrow(), Some(dark_metric()));
    }

    #[tokio::test]
    async fn test_insert_if_absent_does_not_clobber_existing_row() {
        let repo = setup_test().await;
        repo.update(&dark_metric()).await.unwrap();

        repo.insert_if_absent(&Settings::default()).await.unwrap();

        assert_eq!(*repo.stream_current().borrow(), Some(dark_metric()));
    }

    #[tokio::test]
    async fn test_delete_clears_row_and_publishes_none() {
        let repo = setup_test().await;
        let rx = repo.stream_current();

        repo.delete().await.expect("Failed to delete settings");

        assert_eq!(*rx.borrow(), None);
    }

    #[tokio::test]
    async fn test_corrupt_row_fails_load() {
        let db = DbConnection::init_test().await.unwrap();
        sqlx::query("UPDATE settings SET theme = 9 WHERE id = 1")
            .execute(db.pool())
            .await
            .unwrap();

        let result = SettingsRepository::new(db).await;
        assert!(result.is_err(), "Corrupt enum index must not decode");
    }
}
