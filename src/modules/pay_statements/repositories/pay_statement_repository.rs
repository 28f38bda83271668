use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::pay_statements::models::{PayStatement, StatementLineItem};

/// Persistence for generated statements and their itemization
#[async_trait]
pub trait PayStatementRepository: Send + Sync {
    /// Store a statement with its line items, returning it with an id assigned
    async fn save(
        &self,
        statement: PayStatement,
        line_items: Vec<StatementLineItem>,
    ) -> Result<PayStatement>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PayStatement>>;

    async fn find_line_items(&self, statement_id: Uuid) -> Result<Vec<StatementLineItem>>;

    /// A driver's statements, most recent period first
    async fn list_for_driver(&self, company_id: Uuid, driver_id: Uuid)
        -> Result<Vec<PayStatement>>;
}

struct StoredStatement {
    statement: PayStatement,
    line_items: Vec<StatementLineItem>,
}

pub struct InMemoryPayStatementRepository {
    statements: RwLock<Vec<StoredStatement>>,
}

impl InMemoryPayStatementRepository {
    pub fn new() -> Self {
        Self {
            statements: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPayStatementRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PayStatementRepository for InMemoryPayStatementRepository {
    async fn save(
        &self,
        mut statement: PayStatement,
        line_items: Vec<StatementLineItem>,
    ) -> Result<PayStatement> {
        let mut statements = self.statements.write().await;

        let id = *statement.id.get_or_insert_with(Uuid::new_v4);
        if statements.iter().any(|s| s.statement.id == Some(id)) {
            return Err(AppError::data_store(format!(
                "Pay statement {} already exists",
                id
            )));
        }

        statements.push(StoredStatement {
            statement: statement.clone(),
            line_items,
        });

        Ok(statement)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PayStatement>> {
        let statements = self.statements.read().await;
        Ok(statements
            .iter()
            .find(|s| s.statement.id == Some(id))
            .map(|s| s.statement.clone()))
    }

    async fn find_line_items(&self, statement_id: Uuid) -> Result<Vec<StatementLineItem>> {
        let statements = self.statements.read().await;
        statements
            .iter()
            .find(|s| s.statement.id == Some(statement_id))
            .map(|s| s.line_items.clone())
            .ok_or_else(|| AppError::not_found(format!("Pay statement {}", statement_id)))
    }

    async fn list_for_driver(
        &self,
        company_id: Uuid,
        driver_id: Uuid,
    ) -> Result<Vec<PayStatement>> {
        let statements = self.statements.read().await;

        let mut found: Vec<PayStatement> = statements
            .iter()
            .map(|s| &s.statement)
            .filter(|s| s.company_id == company_id && s.driver_id == driver_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.period_start.cmp(&a.period_start));

        Ok(found)
    }
}
