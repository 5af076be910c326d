//! In-process implementation of the URL record repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRecordRepository;
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    records: HashMap<i64, UrlRecord>,
    by_url: HashMap<String, i64>,
    last_id: i64,
}

/// Repository keeping all records in memory.
///
/// All mutations happen under one write lock, which makes `create` and
/// `increment_and_touch` atomic and lets `list_all` take a consistent
/// snapshot. Data is lost when the process exits.
#[derive(Default)]
pub struct MemoryUrlRecordRepository {
    tables: RwLock<Tables>,
}

impl MemoryUrlRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRecordRepository for MemoryUrlRecordRepository {
    async fn create(&self, url: &str) -> Result<UrlRecord, AppError> {
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables.by_url.get(url) {
            return Err(AppError::conflict(
                "URL already shortened",
                json!({ "id": existing }),
            ));
        }

        tables.last_id += 1;
        let record = UrlRecord::fresh(tables.last_id, url.to_string());

        tables.by_url.insert(record.url.clone(), record.id);
        tables.records.insert(record.id, record.clone());

        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.tables.read().await.records.get(&id).cloned())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables
            .by_url
            .get(url)
            .and_then(|id| tables.records.get(id))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let mut records: Vec<UrlRecord> =
            self.tables.read().await.records.values().cloned().collect();
        records.sort_by_key(|record| record.id);

        Ok(records)
    }

    async fn increment_and_touch(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let mut tables = self.tables.write().await;

        Ok(tables.records.get_mut(&id).map(|record| {
            record.touch(Utc::now());
            record.clone()
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
