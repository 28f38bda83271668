//! FleetPay driver pay statement engine
//!
//! Prices trips, aggregates a driver's trips, expenses, cash advances and
//! deductions for a pay period into a reconciled statement, and lays the
//! statement out for printing.

pub mod config;
pub mod core;
pub mod modules;
pub mod snapshot;

// Re-export commonly used types
pub use modules::cash_advances;
pub use modules::deductions;
pub use modules::drivers;
pub use modules::expenses;
pub use modules::pay_statements;
pub use modules::trips;
