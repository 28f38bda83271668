use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::money::validate_percent;
use crate::core::traits::Record;
use crate::core::{AppError, Result};

/// A driver employed by a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    /// Per-driver withholding rate; the configured default applies when absent
    #[serde(default)]
    pub tax_withholding_percent: Option<Decimal>,
}

impl Driver {
    pub fn new(company_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            name: name.into(),
            tax_withholding_percent: None,
        }
    }

    pub fn with_tax_withholding_percent(mut self, percent: Decimal) -> Self {
        self.tax_withholding_percent = Some(percent);
        self
    }

    /// The driver's withholding rate, falling back to `default_percent`
    pub fn effective_tax_percent(&self, default_percent: Decimal) -> Result<Decimal> {
        let percent = self.tax_withholding_percent.unwrap_or(default_percent);
        validate_percent(percent)
            .map_err(|e| AppError::validation(format!("Driver {}: {}", self.id, e)))?;
        Ok(percent)
    }
}

impl Record for Driver {
    fn id(&self) -> Uuid {
        self.id
    }
}
