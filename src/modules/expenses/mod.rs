pub mod models;

pub use models::{Expense, ReimbursementStatus};
