//! Integration tests for pay statement generation through the service
//!
//! Wires the statement service to in-memory stores and checks period
//! filtering, tax resolution, persistence and error cases.

#[path = "../helpers/mod.rs"]
mod helpers;

use fleetpay::core::traits::Repository;
use fleetpay::core::AppError;
use fleetpay::deductions::DeductionType;
use fleetpay::pay_statements::models::{LineItemKind, PayStatementStatus};
use fleetpay::pay_statements::services::GenerateStatementRequest;
use fleetpay::trips::RateType;
use helpers::*;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn request(factory: &TestDataFactory, start: u32, end: u32) -> GenerateStatementRequest {
    GenerateStatementRequest {
        company_id: factory.company_id,
        driver_id: factory.driver.id,
        period_start: march(start),
        period_end: march(end),
        tax_percent: None,
    }
}

async fn seed_worked_example(stores: &TestStores, factory: &TestDataFactory) {
    stores.drivers.create(factory.driver.clone()).await.unwrap();

    // 247.00 + 100.00 + 160.00 + 48.75 = 555.75
    for trip in [
        factory.trip(march(2), RateType::PerMile, dec!(380), dec!(0.65), None),
        factory.trip(march(4), RateType::Percentage, dec!(100), dec!(50), None),
        factory.trip(march(6), RateType::Hourly, dec!(0), dec!(20), Some(dec!(8))),
        factory.fixed_trip(march(9), dec!(48.75)),
    ] {
        stores.trips.create(trip).await.unwrap();
    }

    stores.expenses.create(factory.expense(march(3), "fuel", dec!(164.00))).await.unwrap();
    stores.expenses.create(factory.expense(march(7), "tolls", dec!(50.00))).await.unwrap();

    stores.cash_advances.create(factory.cash_advance(march(5), dec!(200.00))).await.unwrap();

    stores
        .deductions
        .create(factory.deduction(march(1), DeductionType::Insurance, dec!(150.00)))
        .await
        .unwrap();
    stores
        .deductions
        .create(factory.deduction(march(15), DeductionType::Retirement, dec!(55.75)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_generates_worked_example() {
    let stores = TestStores::new();
    let factory = TestDataFactory::new();
    seed_worked_example(&stores, &factory).await;

    let generated = stores
        .service(dec!(15))
        .generate_statement(request(&factory, 1, 15))
        .await
        .unwrap();
    let statement = &generated.statement;

    assert!(statement.id.is_some());
    assert_eq!(statement.driver_name, "Maria Lopez");
    assert_eq!(statement.trips.len(), 4);
    assert_eq!(statement.trip_total, dec!(555.75));
    assert_eq!(statement.expense_total, dec!(214.00));
    assert_eq!(statement.cash_advance_total, dec!(200.00));
    assert_eq!(statement.deductions_total, dec!(205.75));
    assert_eq!(statement.gross_pay, dec!(555.75));
    assert_eq!(statement.tax_withholding, dec!(83.36));
    assert_eq!(statement.net_pay, dec!(-147.36));
    assert_eq!(statement.status, PayStatementStatus::Draft);

    // 4 trips + 2 expenses + 1 advance + 2 deductions + tax
    assert_eq!(generated.line_items.len(), 10);
    assert_eq!(
        generated.line_items.last().unwrap().kind,
        LineItemKind::TaxWithholding
    );
}

#[tokio::test]
async fn test_only_records_inside_period_are_used() {
    let stores = TestStores::new();
    let factory = TestDataFactory::new();
    seed_worked_example(&stores, &factory).await;

    // Only the 2025-03-01..=2025-03-05 window
    let generated = stores
        .service(dec!(15))
        .generate_statement(request(&factory, 1, 5))
        .await
        .unwrap();
    let statement = &generated.statement;

    assert_eq!(statement.trips.len(), 2);
    assert_eq!(statement.trip_total, dec!(347.00));
    assert_eq!(statement.expense_total, dec!(164.00));
    assert_eq!(statement.cash_advance_total, dec!(200.00));
    assert_eq!(statement.deductions_total, dec!(150.00));
    assert_eq!(statement.tax_withholding, dec!(52.05));
    assert_eq!(statement.net_pay, dec!(-219.05));
}

#[tokio::test]
async fn test_other_drivers_records_are_ignored() {
    let stores = TestStores::new();
    let factory = TestDataFactory::new();
    let colleague = factory.colleague();
    stores.drivers.create(factory.driver.clone()).await.unwrap();
    stores.drivers.create(colleague.driver.clone()).await.unwrap();

    stores.trips.create(factory.fixed_trip(march(3), dec!(500))).await.unwrap();
    stores.trips.create(colleague.fixed_trip(march(3), dec!(900))).await.unwrap();
    stores
        .expenses
        .create(colleague.expense(march(3), "fuel", dec!(75)))
        .await
        .unwrap();

    let generated = stores
        .service(dec!(10))
        .generate_statement(request(&factory, 1, 31))
        .await
        .unwrap();

    assert_eq!(generated.statement.trip_total, dec!(500));
    assert_eq!(generated.statement.expense_total, dec!(0));
    assert_eq!(generated.statement.net_pay, dec!(450.00));
}

#[tokio::test]
async fn test_tax_percent_resolution() {
    let stores = TestStores::new();
    let mut factory = TestDataFactory::new();
    factory.driver = factory.driver.clone().with_tax_withholding_percent(dec!(20));
    stores.drivers.create(factory.driver.clone()).await.unwrap();
    stores.trips.create(factory.fixed_trip(march(3), dec!(1000))).await.unwrap();

    let service = stores.service(dec!(15));

    // Driver's own rate beats the configured default
    let generated = service.generate_statement(request(&factory, 1, 31)).await.unwrap();
    assert_eq!(generated.statement.tax_percent, dec!(20));
    assert_eq!(generated.statement.tax_withholding, dec!(200.00));

    // Explicit request beats both
    let mut explicit = request(&factory, 1, 31);
    explicit.tax_percent = Some(dec!(0));
    let generated = service.generate_statement(explicit).await.unwrap();
    assert_eq!(generated.statement.tax_withholding, dec!(0));
    assert_eq!(generated.statement.net_pay, dec!(1000));
}

#[tokio::test]
async fn test_default_tax_percent_applies() {
    let stores = TestStores::new();
    let factory = TestDataFactory::new();
    stores.drivers.create(factory.driver.clone()).await.unwrap();
    stores.trips.create(factory.fixed_trip(march(3), dec!(1000))).await.unwrap();

    let generated = stores
        .service(dec!(15))
        .generate_statement(request(&factory, 1, 31))
        .await
        .unwrap();

    assert_eq!(generated.statement.tax_withholding, dec!(150.00));
}

#[tokio::test]
async fn test_invalid_requests() {
    let stores = TestStores::new();
    let factory = TestDataFactory::new();
    stores.drivers.create(factory.driver.clone()).await.unwrap();
    let service = stores.service(dec!(15));

    // Inverted period
    let result = service.generate_statement(request(&factory, 15, 1)).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    // Out-of-range tax
    let mut bad_tax = request(&factory, 1, 15);
    bad_tax.tax_percent = Some(dec!(101));
    let result = service.generate_statement(bad_tax).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    // Unknown driver
    let mut unknown = request(&factory, 1, 15);
    unknown.driver_id = Uuid::new_v4();
    let result = service.generate_statement(unknown).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    // Driver of another company
    let mut foreign = request(&factory, 1, 15);
    foreign.company_id = Uuid::new_v4();
    let result = service.generate_statement(foreign).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_empty_period_yields_zero_statement() {
    let stores = TestStores::new();
    let factory = TestDataFactory::new();
    stores.drivers.create(factory.driver.clone()).await.unwrap();

    let generated = stores
        .service(dec!(15))
        .generate_statement(request(&factory, 1, 15))
        .await
        .unwrap();

    assert_eq!(generated.statement.gross_pay, dec!(0));
    assert_eq!(generated.statement.net_pay, dec!(0));
    assert_eq!(generated.line_items.len(), 1);
}

#[tokio::test]
async fn test_statements_are_persisted() {
    let stores = TestStores::new();
    let factory = TestDataFactory::new();
    seed_worked_example(&stores, &factory).await;
    let service = stores.service(dec!(15));

    let first = service.generate_statement(request(&factory, 1, 7)).await.unwrap();
    let second = service.generate_statement(request(&factory, 8, 15)).await.unwrap();

    let first_id = first.statement.id.unwrap();
    let found = service.find_statement(first_id).await.unwrap();
    assert_eq!(found, first.statement);

    let items = service.statement_line_items(first_id).await.unwrap();
    assert_eq!(items, first.line_items);

    let listed = service
        .list_statements(factory.company_id, factory.driver.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.statement.id);

    let missing = service.find_statement(Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}
