use crate::core::money::validate_percent;
use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::pay_statements::services::DEFAULT_TAX_WITHHOLDING_PERCENT;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub payroll: PayrollConfig,
    pub documents: DocumentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `pretty` or `json`
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Applied to drivers without their own withholding rate
    pub default_tax_withholding_percent: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub font_dir: PathBuf,
    pub font_family: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, test fixtures)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let default_tax = match lookup("DEFAULT_TAX_WITHHOLDING_PERCENT") {
            Some(raw) => Decimal::from_str(raw.trim()).map_err(|_| {
                AppError::Configuration(format!(
                    "Invalid DEFAULT_TAX_WITHHOLDING_PERCENT: {}",
                    raw
                ))
            })?,
            None => DEFAULT_TAX_WITHHOLDING_PERCENT,
        };

        let config = Config {
            app: AppConfig {
                env: var("APP_ENV", "development"),
                log_level: var("LOG_LEVEL", "info"),
                log_format: var("LOG_FORMAT", "pretty"),
            },
            payroll: PayrollConfig {
                default_tax_withholding_percent: default_tax,
            },
            documents: DocumentConfig {
                font_dir: PathBuf::from(var("PDF_FONT_DIR", "fonts")),
                font_family: var("PDF_FONT_FAMILY", "LiberationSans"),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        validate_percent(self.payroll.default_tax_withholding_percent).map_err(|e| {
            AppError::Configuration(format!("DEFAULT_TAX_WITHHOLDING_PERCENT: {}", e))
        })?;

        if !matches!(self.app.log_format.as_str(), "pretty" | "json") {
            return Err(AppError::Configuration(format!(
                "LOG_FORMAT must be 'pretty' or 'json', got: {}",
                self.app.log_format
            )));
        }

        if self.documents.font_family.trim().is_empty() {
            return Err(AppError::Configuration(
                "PDF_FONT_FAMILY cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
