pub mod models;

pub use models::Driver;
