use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::core::traits::{DriverActivityRepository, DriverRecord, PeriodFilter, Record, Repository};
use crate::core::{AppError, Result};

/// In-memory record store
///
/// Stands in for the hosted data store in tests and in the CLI, which loads
/// a JSON snapshot into one store per record type. Records keep insertion
/// order.
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Build a store pre-populated with records
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T, Uuid> for InMemoryStore<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(AppError::data_store(format!(
                "Record {} already exists",
                entity.id()
            )));
        }

        records.push(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn update(&self, id: Uuid, entity: T) -> Result<T> {
        if entity.id() != id {
            return Err(AppError::validation(format!(
                "Record id {} does not match {}",
                entity.id(),
                id
            )));
        }

        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(format!("Record {}", id)))?;

        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == before {
            return Err(AppError::not_found(format!("Record {}", id)));
        }

        Ok(())
    }

    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<T>> {
        let records = self.records.read().await;
        let offset = offset.unwrap_or(0) as usize;
        let limit = limit.map(|l| l as usize).unwrap_or(usize::MAX);

        Ok(records.iter().skip(offset).take(limit).cloned().collect())
    }
}

#[async_trait]
impl<T: DriverRecord> DriverActivityRepository<T> for InMemoryStore<T> {
    async fn find_for_period(&self, filter: &PeriodFilter) -> Result<Vec<T>> {
        let records = self.records.read().await;

        let mut matching: Vec<T> = records
            .iter()
            .filter(|r| filter.matches(*r))
            .cloned()
            .collect();
        // Stable sort keeps insertion order for same-day records
        matching.sort_by_key(|r| r.date());

        debug!(
            "Found {} records for driver {} between {} and {}",
            matching.len(),
            filter.driver_id,
            filter.start,
            filter.end
        );

        Ok(matching)
    }
}
