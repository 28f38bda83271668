use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::money::validate_percent;
use crate::core::traits::{DriverActivityRepository, PeriodFilter, Repository};
use crate::core::{AppError, Result};
use crate::modules::cash_advances::CashAdvance;
use crate::modules::deductions::Deduction;
use crate::modules::drivers::Driver;
use crate::modules::expenses::Expense;
use crate::modules::pay_statements::models::{
    DriverActivity, PayStatement, StatementLineItem, StatementPeriod,
};
use crate::modules::pay_statements::repositories::PayStatementRepository;
use crate::modules::pay_statements::services::PayStatementAggregator;
use crate::modules::trips::Trip;

/// Where a statement's inputs are read from
#[derive(Clone)]
pub struct StatementDataSources {
    pub drivers: Arc<dyn Repository<Driver, Uuid>>,
    pub trips: Arc<dyn DriverActivityRepository<Trip>>,
    pub expenses: Arc<dyn DriverActivityRepository<Expense>>,
    pub cash_advances: Arc<dyn DriverActivityRepository<CashAdvance>>,
    pub deductions: Arc<dyn DriverActivityRepository<Deduction>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateStatementRequest {
    pub company_id: Uuid,
    pub driver_id: Uuid,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Takes precedence over the driver's own withholding rate
    #[serde(default)]
    pub tax_percent: Option<Decimal>,
}

/// A persisted statement and its itemization
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedStatement {
    pub statement: PayStatement,
    pub line_items: Vec<StatementLineItem>,
}

/// Service for generating driver pay statements
pub struct PayStatementService {
    sources: StatementDataSources,
    statements: Arc<dyn PayStatementRepository>,
    default_tax_percent: Decimal,
}

impl PayStatementService {
    pub fn new(
        sources: StatementDataSources,
        statements: Arc<dyn PayStatementRepository>,
        default_tax_percent: Decimal,
    ) -> Self {
        Self {
            sources,
            statements,
            default_tax_percent,
        }
    }

    /// Generate and persist a draft statement for a driver and period
    ///
    /// The four record collections are fetched concurrently; aggregation
    /// starts once all of them are loaded.
    ///
    /// # Errors
    /// - `Validation` if the period is inverted or the tax percent is outside 0..=100
    /// - `NotFound` if the driver does not exist in the company
    /// - whatever the data sources or statement repository report
    pub async fn generate_statement(
        &self,
        request: GenerateStatementRequest,
    ) -> Result<GeneratedStatement> {
        let period = StatementPeriod::new(request.period_start, request.period_end)?;
        let driver = self.load_driver(request.company_id, request.driver_id).await?;
        let tax_percent = self.resolve_tax_percent(&driver, request.tax_percent)?;

        info!(
            "Generating pay statement: driver={}, period={}..{}, tax={}%",
            driver.id, period.start, period.end, tax_percent
        );

        let activity = self
            .fetch_activity(PeriodFilter::new(
                request.company_id,
                driver.id,
                period.start,
                period.end,
            ))
            .await?;

        if activity.is_empty() {
            warn!(
                "No activity for driver {} between {} and {}",
                driver.id, period.start, period.end
            );
        }

        let statement = PayStatementAggregator::generate(
            request.company_id,
            driver.id,
            &driver.name,
            period,
            activity,
            tax_percent,
        )?;
        let line_items = PayStatementAggregator::line_items(&statement);

        let statement = self
            .statements
            .save(statement, line_items.clone())
            .await?;

        info!(
            "Pay statement {:?} generated: gross={}, net={}, {} line items",
            statement.id,
            statement.gross_pay,
            statement.net_pay,
            line_items.len()
        );

        Ok(GeneratedStatement {
            statement,
            line_items,
        })
    }

    pub async fn find_statement(&self, id: Uuid) -> Result<PayStatement> {
        self.statements
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Pay statement {}", id)))
    }

    pub async fn statement_line_items(&self, id: Uuid) -> Result<Vec<StatementLineItem>> {
        self.statements.find_line_items(id).await
    }

    pub async fn list_statements(
        &self,
        company_id: Uuid,
        driver_id: Uuid,
    ) -> Result<Vec<PayStatement>> {
        self.statements.list_for_driver(company_id, driver_id).await
    }

    async fn load_driver(&self, company_id: Uuid, driver_id: Uuid) -> Result<Driver> {
        let driver = self
            .sources
            .drivers
            .find_by_id(driver_id)
            .await?
            .filter(|d| d.company_id == company_id);

        driver.ok_or_else(|| AppError::not_found(format!("Driver {}", driver_id)))
    }

    fn resolve_tax_percent(&self, driver: &Driver, requested: Option<Decimal>) -> Result<Decimal> {
        match requested {
            Some(percent) => {
                validate_percent(percent).map_err(AppError::validation)?;
                Ok(percent)
            }
            None => driver.effective_tax_percent(self.default_tax_percent),
        }
    }

    async fn fetch_activity(&self, filter: PeriodFilter) -> Result<DriverActivity> {
        let (trips, expenses, cash_advances, deductions) = tokio::try_join!(
            self.sources.trips.find_for_period(&filter),
            self.sources.expenses.find_for_period(&filter),
            self.sources.cash_advances.find_for_period(&filter),
            self.sources.deductions.find_for_period(&filter),
        )?;

        Ok(DriverActivity {
            trips,
            expenses,
            cash_advances,
            deductions,
        })
    }
}
