use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::models::dog::Dog;
use crate::domain::models::settings::{DateFormat, WeightUnit};
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::{DogStore, StoreError};

/// Repository for dog operations.
///
/// Every mutation re-queries the full list and publishes it, so subscribers
/// always hold a fresh snapshot.
#[derive(Clone)]
pub struct DogRepository {
    db: DbConnection,
    publisher: Arc<watch::Sender<Vec<Dog>>>,
}

impl DogRepository {
    /// Create a new dog repository, loading the current rows as the first
    /// published snapshot
    pub async fn new(db: DbConnection) -> Result<Self> {
        let dogs = Self::load_all(&db).await?;
        let (publisher, _) = watch::channel(dogs);

        Ok(Self { db, publisher: Arc::new(publisher) })
    }

    /// Query all dogs ordered by name
    async fn load_all(db: &DbConnection) -> Result<Vec<Dog>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, weight, weight_unit, birth_date, date_format, profile_picture
            FROM dogs
            ORDER BY name ASC
            "#,
        )
        .fetch_all(db.pool())
        .await?;

        rows.iter().map(Self::dog_from_row).collect()
    }

    /// Decode one row, failing hard on an unknown enum index
    fn dog_from_row(row: &SqliteRow) -> Result<Dog> {
        let id: String = row.get("id");
        let weight_unit = WeightUnit::from_index(row.get("weight_unit"))
            .with_context(|| format!("corrupt weight unit for dog {}", id))?;
        let date_format = DateFormat::from_index(row.get("date_format"))
            .with_context(|| format!("corrupt date format for dog {}", id))?;

        Ok(Dog {
            id,
            name: row.get("name"),
            weight: row.get("weight"),
            weight_unit,
            birth_date: row.get("birth_date"),
            date_format,
            profile_picture: row.get("profile_picture"),
        })
    }

    /// Re-query and publish the current snapshot
    async fn refresh(&self) -> Result<()> {
        let dogs = Self::load_all(&self.db).await?;
        self.publisher.send_replace(dogs);
        Ok(())
    }
}

#[async_trait]
impl DogStore for DogRepository {
    fn stream_all(&self) -> watch::Receiver<Vec<Dog>> {
        self.publisher.subscribe()
    }

    async fn find_by_id(&self, dog_id: &str) -> Result<Dog> {
        let row = sqlx::query(
            r#"
            SELECT id, name, weight, weight_unit, birth_date, date_format, profile_picture
            FROM dogs
            WHERE id = ?
            "#,
        )
        .bind(dog_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Self::dog_from_row(&r),
            None => Err(StoreError::DogNotFound(dog_id.to_string()).into()),
        }
    }

    async fn insert_if_absent(&self, dog: &Dog) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO dogs (id, name, weight, weight_unit, birth_date, date_format, profile_picture)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&dog.id)
        .bind(&dog.name)
        .bind(dog.weight)
        .bind(dog.weight_unit.to_index())
        .bind(&dog.birth_date)
        .bind(dog.date_format.to_index())
        .bind(&dog.profile_picture)
        .execute(self.db.pool())
        .await?;

        self.refresh().await
    }

    async fn update(&self, dog: &Dog) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE dogs
            SET name = ?, weight = ?, weight_unit = ?, birth_date = ?, date_format = ?, profile_picture = ?
            WHERE id = ?
            "#,
        )
        .bind(&dog.name)
        .bind(dog.weight)
        .bind(dog.weight_unit.to_index())
        .bind(&dog.birth_date)
        .bind(dog.date_format.to_index())
        .bind(&dog.profile_picture)
        .bind(&dog.id)
        .execute(self.db.pool())
        .await?;

        self.refresh().await
    }

    async fn delete(&self, dog_id: &str) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM dogs WHERE id = ?
            "#,
        )
        .bind(dog_id)
        .execute(self.db.pool())
        .await?;

        self.refresh().await
    }
}
