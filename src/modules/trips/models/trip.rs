// Trip records and the inputs used to create or edit them.
//
// A trip's `amount` is derived from distance, rate, rate type and hours
// worked. It is computed when the trip is created and recomputed only when
// one of those inputs changes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::core::traits::{DriverRecord, Record};
use crate::core::{AppError, Result};
use crate::modules::trips::services::TripPricing;

/// Pricing method for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    /// `distance * rate`
    PerMile,
    /// `rate` percent of a synthetic base value
    Percentage,
    /// `hours_worked * rate`
    Hourly,
    /// `rate` as-is
    Fixed,
    /// Anything the data store holds that we do not price
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    #[default]
    Completed,
    Cancelled,
}

/// A single driving assignment generating driver earnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub company_id: Uuid,
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub distance: Decimal,
    pub rate: Decimal,
    pub rate_type: RateType,
    #[serde(default)]
    pub hours_worked: Option<Decimal>,
    pub amount: Decimal,
    #[serde(default)]
    pub status: TripStatus,
}

/// Input for creating a trip; the amount is derived, never supplied
#[derive(Debug, Clone, Deserialize)]
pub struct NewTrip {
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub distance: Decimal,
    pub rate: Decimal,
    pub rate_type: RateType,
    #[serde(default)]
    pub hours_worked: Option<Decimal>,
    #[serde(default)]
    pub status: TripStatus,
}

/// Partial edit of a trip
///
/// Absent fields are left alone. `hours_worked` distinguishes an absent key
/// (keep) from an explicit `null` (clear, `Some(None)`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripUpdate {
    pub date: Option<NaiveDate>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub distance: Option<Decimal>,
    pub rate: Option<Decimal>,
    pub rate_type: Option<RateType>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub hours_worked: Option<Option<Decimal>>,
    pub status: Option<TripStatus>,
}

// Only called for keys present in the payload, so `null` becomes `Some(None)`
fn present_or_null<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(Some)
}

impl Trip {
    /// Create a priced trip from validated input
    pub fn from_new(company_id: Uuid, input: NewTrip, pricing: &TripPricing) -> Result<Self> {
        Self::validate_place("origin", &input.origin)?;
        Self::validate_place("destination", &input.destination)?;
        Self::validate_non_negative("distance", input.distance)?;
        Self::validate_non_negative("rate", input.rate)?;
        if let Some(hours) = input.hours_worked {
            Self::validate_non_negative("hours_worked", hours)?;
        }

        let mut trip = Self {
            id: Uuid::new_v4(),
            company_id,
            driver_id: input.driver_id,
            date: input.date,
            origin: input.origin,
            destination: input.destination,
            distance: input.distance,
            rate: input.rate,
            rate_type: input.rate_type,
            hours_worked: input.hours_worked,
            amount: Decimal::ZERO,
            status: input.status,
        };
        trip.reprice(pricing)?;

        Ok(trip)
    }

    /// Apply an edit, re-pricing when any pricing input changed
    ///
    /// Returns whether the amount was recomputed. On error the trip is left
    /// unchanged.
    pub fn apply_update(&mut self, update: TripUpdate, pricing: &TripPricing) -> Result<bool> {
        if let Some(ref origin) = update.origin {
            Self::validate_place("origin", origin)?;
        }
        if let Some(ref destination) = update.destination {
            Self::validate_place("destination", destination)?;
        }
        if let Some(distance) = update.distance {
            Self::validate_non_negative("distance", distance)?;
        }
        if let Some(rate) = update.rate {
            Self::validate_non_negative("rate", rate)?;
        }
        if let Some(Some(hours)) = update.hours_worked {
            Self::validate_non_negative("hours_worked", hours)?;
        }

        let pricing_changed = update.distance.is_some_and(|d| d != self.distance)
            || update.rate.is_some_and(|r| r != self.rate)
            || update.rate_type.is_some_and(|t| t != self.rate_type)
            || update
                .hours_worked
                .is_some_and(|h| h != self.hours_worked);

        let mut next = self.clone();
        if let Some(date) = update.date {
            next.date = date;
        }
        if let Some(origin) = update.origin {
            next.origin = origin;
        }
        if let Some(destination) = update.destination {
            next.destination = destination;
        }
        if let Some(distance) = update.distance {
            next.distance = distance;
        }
        if let Some(rate) = update.rate {
            next.rate = rate;
        }
        if let Some(rate_type) = update.rate_type {
            next.rate_type = rate_type;
        }
        if let Some(hours_worked) = update.hours_worked {
            next.hours_worked = hours_worked;
        }
        if let Some(status) = update.status {
            next.status = status;
        }

        if pricing_changed {
            next.reprice(pricing)?;
        }
        *self = next;

        Ok(pricing_changed)
    }

    /// Recompute `amount` from the current pricing inputs
    pub fn reprice(&mut self, pricing: &TripPricing) -> Result<()> {
        self.amount =
            pricing.calculate_amount(self.rate_type, self.distance, self.rate, self.hours_worked)?;
        Ok(())
    }

    /// Route label used on statements
    pub fn route(&self) -> String {
        format!("{} to {}", self.origin, self.destination)
    }

    fn validate_place(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(AppError::validation(format!("Trip {} cannot be empty", field)));
        }

        if value.len() > 255 {
            return Err(AppError::validation(format!(
                "Trip {} cannot exceed 255 characters",
                field
            )));
        }

        Ok(())
    }

    fn validate_non_negative(field: &str, value: Decimal) -> Result<()> {
        if value < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Trip {} must be non-negative, got: {}",
                field, value
            )));
        }

        Ok(())
    }
}

impl Record for Trip {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl DriverRecord for Trip {
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
