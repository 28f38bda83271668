use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::trips::models::{NewTrip, Trip, TripUpdate};
use crate::modules::trips::services::TripPricing;

/// Creates and edits trips, keeping `amount` consistent with the rate inputs
pub struct TripService {
    trips: Arc<dyn Repository<Trip, Uuid>>,
    pricing: TripPricing,
}

impl TripService {
    pub fn new(trips: Arc<dyn Repository<Trip, Uuid>>) -> Self {
        Self {
            trips,
            pricing: TripPricing::new(),
        }
    }

    /// Price and store a new trip
    pub async fn create_trip(&self, company_id: Uuid, input: NewTrip) -> Result<Trip> {
        let trip = Trip::from_new(company_id, input, &self.pricing)?;

        info!(
            "Creating trip {} for driver {}: {:?} amount={}",
            trip.id, trip.driver_id, trip.rate_type, trip.amount
        );

        self.trips.create(trip).await
    }

    /// Apply an edit to a stored trip
    ///
    /// # Errors
    /// `NotFound` when the trip does not exist
    pub async fn update_trip(&self, id: Uuid, update: TripUpdate) -> Result<Trip> {
        let mut trip = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Trip {}", id)))?;

        let previous_amount = trip.amount;
        if trip.apply_update(update, &self.pricing)? {
            info!(
                "Trip {} re-priced: {} -> {}",
                trip.id, previous_amount, trip.amount
            );
        }

        self.trips.update(id, trip).await
    }

    pub async fn get_trip(&self, id: Uuid) -> Result<Trip> {
        self.trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Trip {}", id)))
    }
}
