pub mod line_item;
pub mod pay_statement;

pub use line_item::{LineItemKind, StatementLineItem};
pub use pay_statement::{DriverActivity, PayStatement, PayStatementStatus, StatementPeriod};
