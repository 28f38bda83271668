use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::core::traits::{DriverRecord, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionType {
    Tax,
    Insurance,
    Retirement,
    Other,
}

impl fmt::Display for DeductionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeductionType::Tax => write!(f, "Tax"),
            DeductionType::Insurance => write!(f, "Insurance"),
            DeductionType::Retirement => write!(f, "Retirement"),
            DeductionType::Other => write!(f, "Other"),
        }
    }
}

/// A recurring or one-off amount withheld from a driver's pay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deduction {
    pub id: Uuid,
    pub company_id: Uuid,
    pub driver_id: Uuid,
    #[serde(rename = "type")]
    pub deduction_type: DeductionType,
    #[serde(default)]
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl Record for Deduction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl DriverRecord for Deduction {
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
