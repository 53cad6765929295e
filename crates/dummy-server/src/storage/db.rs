//! Postgres database layer

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::{DummyData, SlowQuery};
use crate::storage::DummyStore;

pub struct Database {
    pool: Arc<PgPool>,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        tracing::info!("Connecting to Postgres...");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("Failed to connect to Postgres")?;

        tracing::info!("Postgres connection established, running migrations...");

        // Run migrations (inline for simplicity)
        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &PgPool) -> Result<()> {
        // Dummy data table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS dummy_table (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Cheap liveness probe for the health endpoint
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }

    /// Statements recorded by the pg_stat_statements extension, ranked by
    /// total planning time
    pub async fn slowest_queries(&self) -> Result<Vec<SlowQuery>> {
        let rows: Vec<SlowQueryRow> = sqlx::query_as(
            r#"
            SELECT query, total_plan_time
            FROM pg_stat_statements
            ORDER BY total_plan_time DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .context("Failed to read pg_stat_statements (is the extension installed?)")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[async_trait]
impl DummyStore for Database {
    async fn list_dummy_data(&self) -> Result<Vec<DummyData>> {
        let rows: Vec<DummyRow> = sqlx::query_as(
            r#"
            SELECT id, name FROM dummy_table ORDER BY id
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn insert_dummy_data(&self, name: &str) -> Result<DummyData> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO dummy_table (name) VALUES ($1) RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&*self.pool)
        .await?;

        Ok(DummyData {
            id,
            name: name.to_string(),
        })
    }

    async fn dummy_data_exists(&self, id: i32) -> Result<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(SELECT 1 FROM dummy_table WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&*self.pool)
        .await?;

        Ok(exists)
    }

    async fn update_dummy_data(&self, id: i32, name: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE dummy_table SET name = $1 WHERE id = $2
            "#,
        )
        .bind(name)
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(())
    }

    async fn delete_dummy_data(&self, id: i32) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM dummy_table WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(())
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct DummyRow {
    id: i32,
    name: String,
}

impl From<DummyRow> for DummyData {
    fn from(r: DummyRow) -> Self {
        DummyData {
            id: r.id,
            name: r.name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SlowQueryRow {
    query: String,
    total_plan_time: f64,
}

impl From<SlowQueryRow> for SlowQuery {
    fn from(r: SlowQueryRow) -> Self {
        SlowQuery {
            query: r.query,
            total_plan_time: r.total_plan_time,
        }
    }
}
