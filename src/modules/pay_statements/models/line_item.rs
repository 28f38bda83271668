use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    Trip,
    Expense,
    CashAdvance,
    Deduction,
    TaxWithholding,
}

/// One row of a statement's itemization, as persisted next to the statement
///
/// Earnings carry a positive amount, everything withheld a negative one, so
/// the rows of a statement sum to its net pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLineItem {
    pub kind: LineItemKind,
    /// Id of the trip/expense/advance/deduction; `None` for tax withholding
    pub source_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub description: String,
    pub amount: Decimal,
}

impl StatementLineItem {
    /// Positive earnings row
    pub fn earning(
        kind: LineItemKind,
        source_id: Uuid,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            kind,
            source_id: Some(source_id),
            date: Some(date),
            description: description.into(),
            amount,
        }
    }

    /// Negative row; `amount` is given as the positive value withheld
    pub fn charge(
        kind: LineItemKind,
        source_id: Option<Uuid>,
        date: Option<NaiveDate>,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            kind,
            source_id,
            date,
            description: description.into(),
            amount: -amount,
        }
    }
}
