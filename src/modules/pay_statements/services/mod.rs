pub mod aggregator;
pub mod statement_service;

pub use aggregator::{PayStatementAggregator, DEFAULT_TAX_WITHHOLDING_PERCENT};
pub use statement_service::{
    GenerateStatementRequest, GeneratedStatement, PayStatementService, StatementDataSources,
};
