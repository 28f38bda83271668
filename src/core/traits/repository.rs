use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::Result;

/// A stored record addressable by id
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// A record belonging to one driver of one company on a given date
pub trait DriverRecord: Record {
    fn company_id(&self) -> Uuid;
    fn driver_id(&self) -> Uuid;
    fn date(&self) -> NaiveDate;
}

/// Company/driver/date-range filter used when collecting a driver's activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodFilter {
    pub company_id: Uuid,
    pub driver_id: Uuid,
    /// Inclusive
    pub start: NaiveDate,
    /// Inclusive
    pub end: NaiveDate,
}

impl PeriodFilter {
    pub fn new(company_id: Uuid, driver_id: Uuid, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            company_id,
            driver_id,
            start,
            end,
        }
    }

    /// Whether the record falls inside this filter
    pub fn matches<T: DriverRecord>(&self, record: &T) -> bool {
        record.company_id() == self.company_id
            && record.driver_id() == self.driver_id
            && record.date() >= self.start
            && record.date() <= self.end
    }
}

/// Base repository trait for CRUD operations
/// All record stores implement this trait for consistency
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// Update an existing entity
    async fn update(&self, id: ID, entity: T) -> Result<T>;

    /// Delete an entity by ID
    async fn delete(&self, id: ID) -> Result<()>;

    /// List all entities (with optional pagination)
    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<T>>;
}

/// Read access to a driver's records over a period
#[async_trait]
pub trait DriverActivityRepository<T>: Send + Sync {
    /// Records matching the filter, ordered by date
    async fn find_for_period(&self, filter: &PeriodFilter) -> Result<Vec<T>>;
}
