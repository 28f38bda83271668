// In-memory data store wiring for statement service tests.

use std::sync::Arc;

use rust_decimal::Decimal;

use fleetpay::cash_advances::CashAdvance;
use fleetpay::core::InMemoryStore;
use fleetpay::deductions::Deduction;
use fleetpay::drivers::Driver;
use fleetpay::expenses::Expense;
use fleetpay::pay_statements::repositories::InMemoryPayStatementRepository;
use fleetpay::pay_statements::services::{PayStatementService, StatementDataSources};
use fleetpay::trips::Trip;

/// One store per record type, shared with the service under test
pub struct TestStores {
    pub drivers: Arc<InMemoryStore<Driver>>,
    pub trips: Arc<InMemoryStore<Trip>>,
    pub expenses: Arc<InMemoryStore<Expense>>,
    pub cash_advances: Arc<InMemoryStore<CashAdvance>>,
    pub deductions: Arc<InMemoryStore<Deduction>>,
    pub statements: Arc<InMemoryPayStatementRepository>,
}

impl TestStores {
    pub fn new() -> Self {
        Self {
            drivers: Arc::new(InMemoryStore::new()),
            trips: Arc::new(InMemoryStore::new()),
            expenses: Arc::new(InMemoryStore::new()),
            cash_advances: Arc::new(InMemoryStore::new()),
            deductions: Arc::new(InMemoryStore::new()),
            statements: Arc::new(InMemoryPayStatementRepository::new()),
        }
    }

    pub fn service(&self, default_tax_percent: Decimal) -> PayStatementService {
        let sources = StatementDataSources {
            drivers: self.drivers.clone(),
            trips: self.trips.clone(),
            expenses: self.expenses.clone(),
            cash_advances: self.cash_advances.clone(),
            deductions: self.deductions.clone(),
        };

        PayStatementService::new(sources, self.statements.clone(), default_tax_percent)
    }
}
