use rust_decimal::Decimal;
use tracing::warn;

use crate::core::money::{checked_product, percent_of, round_money};
use crate::core::Result;
use crate::modules::trips::models::RateType;

/// Synthetic trip value per mile used as the base for percentage pricing.
/// The data store has no load value to take a percentage of.
pub const PERCENTAGE_BASE_VALUE_PER_MILE: Decimal = Decimal::TWO;

/// TripPricing derives a trip's amount from its rate inputs
pub struct TripPricing;

impl TripPricing {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the amount earned for a trip
    ///
    /// - per_mile: `distance * rate`, rounded to cents
    /// - percentage: `(distance * 2) * rate / 100`, rounded to cents
    /// - hourly: `hours_worked * rate`, or zero without hours
    /// - fixed: `rate`
    /// - unknown: zero
    ///
    /// Inputs whose product does not fit a decimal are a validation error.
    pub fn calculate_amount(
        &self,
        rate_type: RateType,
        distance: Decimal,
        rate: Decimal,
        hours_worked: Option<Decimal>,
    ) -> Result<Decimal> {
        let amount = match rate_type {
            RateType::PerMile => round_money(checked_product(distance, rate)?),
            RateType::Percentage => {
                let base_value = self.percentage_base_value(distance)?;
                round_money(percent_of(base_value, rate)?)
            }
            RateType::Hourly => match hours_worked {
                Some(hours) => checked_product(hours, rate)?,
                None => Decimal::ZERO,
            },
            RateType::Fixed => rate,
            RateType::Unknown => {
                warn!("Unknown rate type, trip amount set to zero (rate={})", rate);
                Decimal::ZERO
            }
        };

        Ok(amount)
    }

    /// Base trip value a percentage rate applies to
    pub fn percentage_base_value(&self, distance: Decimal) -> Result<Decimal> {
        checked_product(distance, PERCENTAGE_BASE_VALUE_PER_MILE)
    }
}

impl Default for TripPricing {
    fn default() -> Self {
        Self::new()
    }
}
