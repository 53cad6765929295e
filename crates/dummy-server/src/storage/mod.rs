//! Storage layer
//!
//! Postgres holds the dummy data rows; Redis fronts them with a single
//! TTL'd cache entry.

pub mod cache;
pub mod db;

pub use cache::RedisCache;
pub use db::Database;

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::models::DummyData;

/// Persistent store for dummy data rows
#[async_trait]
pub trait DummyStore: Send + Sync {
    async fn list_dummy_data(&self) -> Result<Vec<DummyData>>;
    async fn insert_dummy_data(&self, name: &str) -> Result<DummyData>;
    async fn dummy_data_exists(&self, id: i32) -> Result<bool>;
    async fn update_dummy_data(&self, id: i32, name: &str) -> Result<()>;
    async fn delete_dummy_data(&self, id: i32) -> Result<()>;
}

/// Byte cache with per-entry expiration
#[async_trait]
pub trait DataCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}
