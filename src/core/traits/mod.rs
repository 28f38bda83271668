pub mod repository;

pub use repository::{DriverActivityRepository, DriverRecord, PeriodFilter, Record, Repository};
