use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::traits::{DriverRecord, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashAdvanceStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

/// Money paid to a driver ahead of settlement, recovered on the pay statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashAdvance {
    pub id: Uuid,
    pub company_id: Uuid,
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub status: CashAdvanceStatus,
}

impl Record for CashAdvance {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl DriverRecord for CashAdvance {
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
