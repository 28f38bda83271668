use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::traits::{DriverRecord, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReimbursementStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

/// A cost a driver incurred on the road (fuel, tolls, lodging, ...)
///
/// Every expense in a period is subtracted from the driver's pay, whether or
/// not it is flagged reimbursable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub company_id: Uuid,
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reimbursable: bool,
    #[serde(default)]
    pub reimbursement_status: Option<ReimbursementStatus>,
}

impl Expense {
    /// Label used on statements: the description, or the category when blank
    pub fn label(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.category
        } else {
            &self.description
        }
    }
}

impl Record for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl DriverRecord for Expense {
    fn company_id(&self) -> Uuid {
        self.company_id
    }

    fn driver_id(&self) -> Uuid {
        self.driver_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}
