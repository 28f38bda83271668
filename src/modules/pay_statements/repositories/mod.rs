pub mod pay_statement_repository;

pub use pay_statement_repository::{InMemoryPayStatementRepository, PayStatementRepository};
