pub mod trip;

pub use trip::{NewTrip, RateType, Trip, TripStatus, TripUpdate};
