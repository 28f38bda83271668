pub mod models;

pub use models::{CashAdvance, CashAdvanceStatus};
