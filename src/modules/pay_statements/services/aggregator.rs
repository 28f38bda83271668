use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::core::money::{checked_sum, percent_of, round_money};
use crate::core::{AppError, Result};
use crate::modules::cash_advances::CashAdvance;
use crate::modules::deductions::Deduction;
use crate::modules::expenses::Expense;
use crate::modules::pay_statements::models::{
    DriverActivity, LineItemKind, PayStatement, PayStatementStatus, StatementLineItem,
    StatementPeriod,
};
use crate::modules::trips::Trip;

/// Withholding rate used when neither the driver nor the caller supplies one
pub const DEFAULT_TAX_WITHHOLDING_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Turns a driver's activity for a period into a reconciled statement
///
/// Pure arithmetic over already-loaded records. Empty collections contribute
/// zero; the only failure is a total too large for a decimal.
pub struct PayStatementAggregator;

impl PayStatementAggregator {
    pub fn trip_total(trips: &[Trip]) -> Result<Decimal> {
        checked_sum("trip total", trips.iter().map(|t| t.amount))
    }

    pub fn expense_total(expenses: &[Expense]) -> Result<Decimal> {
        checked_sum("expense total", expenses.iter().map(|e| e.amount))
    }

    pub fn cash_advance_total(advances: &[CashAdvance]) -> Result<Decimal> {
        checked_sum("cash advance total", advances.iter().map(|a| a.amount))
    }

    pub fn deductions_total(deductions: &[Deduction]) -> Result<Decimal> {
        checked_sum("deductions total", deductions.iter().map(|d| d.amount))
    }

    /// `gross_pay * percent / 100`, rounded to cents
    pub fn tax_withholding(gross_pay: Decimal, percent: Decimal) -> Result<Decimal> {
        Ok(round_money(percent_of(gross_pay, percent)?))
    }

    /// Compose a draft statement dated today (UTC)
    pub fn generate(
        company_id: Uuid,
        driver_id: Uuid,
        driver_name: &str,
        period: StatementPeriod,
        activity: DriverActivity,
        tax_percent: Decimal,
    ) -> Result<PayStatement> {
        Self::generate_on(
            company_id,
            driver_id,
            driver_name,
            period,
            activity,
            tax_percent,
            chrono::Utc::now().date_naive(),
        )
    }

    /// Compose a draft statement with an explicit generation date
    pub fn generate_on(
        company_id: Uuid,
        driver_id: Uuid,
        driver_name: &str,
        period: StatementPeriod,
        activity: DriverActivity,
        tax_percent: Decimal,
        generated_date: NaiveDate,
    ) -> Result<PayStatement> {
        let trip_total = Self::trip_total(&activity.trips)?;
        let expense_total = Self::expense_total(&activity.expenses)?;
        let cash_advance_total = Self::cash_advance_total(&activity.cash_advances)?;
        let deductions_total = Self::deductions_total(&activity.deductions)?;

        let gross_pay = trip_total;
        let tax_withholding = Self::tax_withholding(gross_pay, tax_percent)?;
        let subtractions = checked_sum(
            "statement subtractions",
            [expense_total, cash_advance_total, tax_withholding, deductions_total],
        )?;
        let net_pay = gross_pay.checked_sub(subtractions).ok_or_else(|| {
            AppError::validation(format!(
                "Amount out of range: net pay {} - {}",
                gross_pay, subtractions
            ))
        })?;

        debug!(
            "Aggregated {} records for driver {}: gross={} tax={} net={}",
            activity.record_count(),
            driver_id,
            gross_pay,
            tax_withholding,
            net_pay
        );

        Ok(PayStatement {
            id: None,
            company_id,
            driver_id,
            driver_name: driver_name.to_string(),
            period_start: period.start,
            period_end: period.end,
            trips: activity.trips,
            expenses: activity.expenses,
            cash_advances: activity.cash_advances,
            deductions: activity.deductions,
            trip_total,
            expense_total,
            cash_advance_total,
            gross_pay,
            tax_percent,
            tax_withholding,
            deductions_total,
            net_pay,
            generated_date,
            status: PayStatementStatus::Draft,
        })
    }

    /// Flatten a statement into persisted line items
    ///
    /// One positive row per trip, one negative row per expense, advance and
    /// deduction, then a negative tax-withholding row.
    pub fn line_items(statement: &PayStatement) -> Vec<StatementLineItem> {
        let mut items = Vec::with_capacity(
            statement.trips.len()
                + statement.expenses.len()
                + statement.cash_advances.len()
                + statement.deductions.len()
                + 1,
        );

        for trip in &statement.trips {
            items.push(StatementLineItem::earning(
                LineItemKind::Trip,
                trip.id,
                trip.date,
                trip.route(),
                trip.amount,
            ));
        }

        for expense in &statement.expenses {
            items.push(StatementLineItem::charge(
                LineItemKind::Expense,
                Some(expense.id),
                Some(expense.date),
                expense.label(),
                expense.amount,
            ));
        }

        for advance in &statement.cash_advances {
            let description = if advance.description.trim().is_empty() {
                "Cash advance".to_string()
            } else {
                advance.description.clone()
            };
            items.push(StatementLineItem::charge(
                LineItemKind::CashAdvance,
                Some(advance.id),
                Some(advance.date),
                description,
                advance.amount,
            ));
        }

        for deduction in &statement.deductions {
            let description = if deduction.description.trim().is_empty() {
                deduction.deduction_type.to_string()
            } else {
                format!("{}: {}", deduction.deduction_type, deduction.description)
            };
            items.push(StatementLineItem::charge(
                LineItemKind::Deduction,
                Some(deduction.id),
                Some(deduction.date),
                description,
                deduction.amount,
            ));
        }

        items.push(StatementLineItem::charge(
            LineItemKind::TaxWithholding,
            None,
            None,
            format!("Tax withholding ({}%)", statement.tax_percent.normalize()),
            statement.tax_withholding,
        ));

        items
    }
}
