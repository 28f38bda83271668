pub mod models;

pub use models::{Deduction, DeductionType};
