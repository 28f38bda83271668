//! JSON export of one driver's records, as consumed by the `fleetpay` binary.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::core::{InMemoryStore, Result};
use crate::modules::cash_advances::CashAdvance;
use crate::modules::deductions::Deduction;
use crate::modules::drivers::Driver;
use crate::modules::expenses::Expense;
use crate::modules::pay_statements::repositories::InMemoryPayStatementRepository;
use crate::modules::pay_statements::services::{
    GenerateStatementRequest, PayStatementService, StatementDataSources,
};
use crate::modules::trips::Trip;

#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySnapshot {
    pub driver: Driver,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(default)]
    pub tax_percent: Option<Decimal>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub cash_advances: Vec<CashAdvance>,
    #[serde(default)]
    pub deductions: Vec<Deduction>,
}

impl ActivitySnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;

        info!(
            "Loaded snapshot {}: {} trips, {} expenses, {} cash advances, {} deductions",
            path.display(),
            snapshot.trips.len(),
            snapshot.expenses.len(),
            snapshot.cash_advances.len(),
            snapshot.deductions.len()
        );

        Ok(snapshot)
    }

    /// The request that generates this snapshot's statement
    pub fn request(&self) -> GenerateStatementRequest {
        GenerateStatementRequest {
            company_id: self.driver.company_id,
            driver_id: self.driver.id,
            period_start: self.period_start,
            period_end: self.period_end,
            tax_percent: self.tax_percent,
        }
    }

    /// Load the snapshot into in-memory stores behind a statement service
    pub fn into_service(self, default_tax_percent: Decimal) -> PayStatementService {
        let sources = StatementDataSources {
            drivers: Arc::new(InMemoryStore::with_records(vec![self.driver])),
            trips: Arc::new(InMemoryStore::with_records(self.trips)),
            expenses: Arc::new(InMemoryStore::with_records(self.expenses)),
            cash_advances: Arc::new(InMemoryStore::with_records(self.cash_advances)),
            deductions: Arc::new(InMemoryStore::with_records(self.deductions)),
        };

        PayStatementService::new(
            sources,
            Arc::new(InMemoryPayStatementRepository::new()),
            default_tax_percent,
        )
    }
}
