pub mod deduction;

pub use deduction::{Deduction, DeductionType};
