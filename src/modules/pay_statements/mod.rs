pub mod documents;
pub mod models;
pub mod repositories;
pub mod services;

pub use documents::{DocumentRenderer, StatementDocument};
pub use models::{PayStatement, PayStatementStatus, StatementLineItem};
pub use repositories::PayStatementRepository;
pub use services::{PayStatementAggregator, PayStatementService};
