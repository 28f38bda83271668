pub mod trip_pricing;
pub mod trip_service;

pub use trip_pricing::{TripPricing, PERCENTAGE_BASE_VALUE_PER_MILE};
pub use trip_service::TripService;
