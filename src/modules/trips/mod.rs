pub mod models;
pub mod services;

pub use models::{NewTrip, RateType, Trip, TripStatus, TripUpdate};
pub use services::{TripPricing, TripService};
