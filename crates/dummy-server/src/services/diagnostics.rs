//! Slow query diagnostics service

use crate::models::SlowQuery;
use crate::storage::Database;
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

pub struct QueryDiagnostics {
    db: Arc<Database>,
}

impl QueryDiagnostics {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Statements ranked by total planning time, slowest first
    pub async fn slowest_queries(&self) -> Result<Vec<SlowQuery>> {
        debug!("Collecting slowest queries");
        self.db.slowest_queries().await
    }
}
