pub mod cash_advance;

pub use cash_advance::{CashAdvance, CashAdvanceStatus};
