use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::cash_advances::CashAdvance;
use crate::modules::deductions::Deduction;
use crate::modules::expenses::Expense;
use crate::modules::trips::Trip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayStatementStatus {
    #[default]
    Draft,
    Finalized,
    Paid,
}

/// Inclusive date range a statement covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StatementPeriod {
    /// Create a period, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AppError::validation(format!(
                "period_start ({}) must be before or equal to period_end ({})",
                start, end
            )));
        }

        Ok(Self { start, end })
    }
}

/// A driver's records for one period, fully loaded before aggregation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverActivity {
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub cash_advances: Vec<CashAdvance>,
    #[serde(default)]
    pub deductions: Vec<Deduction>,
}

impl DriverActivity {
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
            && self.expenses.is_empty()
            && self.cash_advances.is_empty()
            && self.deductions.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.trips.len() + self.expenses.len() + self.cash_advances.len() + self.deductions.len()
    }
}

/// Periodic reconciliation of a driver's earnings
///
/// `gross_pay == trip_total` and
/// `net_pay == gross_pay - expense_total - cash_advance_total - tax_withholding - deductions_total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayStatement {
    /// Assigned when the statement is persisted
    pub id: Option<Uuid>,
    pub company_id: Uuid,
    pub driver_id: Uuid,
    pub driver_name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub trips: Vec<Trip>,
    pub expenses: Vec<Expense>,
    pub cash_advances: Vec<CashAdvance>,
    pub deductions: Vec<Deduction>,
    pub trip_total: Decimal,
    pub expense_total: Decimal,
    pub cash_advance_total: Decimal,
    pub gross_pay: Decimal,
    /// Percent applied to gross pay to obtain `tax_withholding`
    pub tax_percent: Decimal,
    pub tax_withholding: Decimal,
    pub deductions_total: Decimal,
    pub net_pay: Decimal,
    pub generated_date: NaiveDate,
    pub status: PayStatementStatus,
}
