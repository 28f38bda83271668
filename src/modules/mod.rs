pub mod cash_advances;
pub mod deductions;
pub mod drivers;
pub mod expenses;
pub mod pay_statements;
pub mod trips;
