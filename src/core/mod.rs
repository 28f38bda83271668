pub mod error;
pub mod money;
pub mod store;
pub mod traits;

pub use error::{AppError, Result};
pub use store::InMemoryStore;
