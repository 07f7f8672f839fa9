use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::domain::models::settings::Settings;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:pawcalc.db";

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // Create dogs table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS dogs (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                weight REAL NOT NULL,
                weight_unit INTEGER NOT NULL,
                birth_date TEXT NOT NULL,
                date_format INTEGER NOT NULL,
                profile_picture TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create settings table; the id check keeps it to a single row
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                weight_unit INTEGER NOT NULL,
                date_format INTEGER NOT NULL,
                theme INTEGER NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Seed the settings row so it exists from first boot
        let defaults = Settings::default();
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO settings (id, weight_unit, date_format, theme)
            VALUES (1, ?, ?, ?)
            "#,
        )
        .bind(defaults.weight_unit.to_index())
        .bind(defaults.date_format.to_index())
        .bind(defaults.theme.to_index())
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
