// Property-based tests for statement aggregation
//
// - trip_total is the sum of trip amounts
// - net_pay = gross_pay - expenses - advances - tax - deductions
// - zero gross pay withholds zero tax at any rate
// - line items sum to net pay

use chrono::NaiveDate;
use fleetpay::cash_advances::{CashAdvance, CashAdvanceStatus};
use fleetpay::deductions::{Deduction, DeductionType};
use fleetpay::expenses::Expense;
use fleetpay::pay_statements::models::{DriverActivity, StatementPeriod};
use fleetpay::pay_statements::services::PayStatementAggregator;
use fleetpay::trips::{RateType, Trip, TripStatus};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()
}

fn cents(value: u32) -> Decimal {
    Decimal::new(value as i64, 2)
}

fn activity(trips: &[u32], expenses: &[u32], advances: &[u32], deductions: &[u32]) -> DriverActivity {
    DriverActivity {
        trips: trips
            .iter()
            .map(|c| Trip {
                id: Uuid::new_v4(),
                company_id: Uuid::nil(),
                driver_id: Uuid::nil(),
                date: day(),
                origin: "A".to_string(),
                destination: "B".to_string(),
                distance: Decimal::ZERO,
                rate: cents(*c),
                rate_type: RateType::Fixed,
                hours_worked: None,
                amount: cents(*c),
                status: TripStatus::Completed,
            })
            .collect(),
        expenses: expenses
            .iter()
            .map(|c| Expense {
                id: Uuid::new_v4(),
                company_id: Uuid::nil(),
                driver_id: Uuid::nil(),
                date: day(),
                category: "tolls".to_string(),
                amount: cents(*c),
                description: String::new(),
                reimbursable: false,
                reimbursement_status: None,
            })
            .collect(),
        cash_advances: advances
            .iter()
            .map(|c| CashAdvance {
                id: Uuid::new_v4(),
                company_id: Uuid::nil(),
                driver_id: Uuid::nil(),
                date: day(),
                amount: cents(*c),
                description: String::new(),
                status: CashAdvanceStatus::Approved,
            })
            .collect(),
        deductions: deductions
            .iter()
            .map(|c| Deduction {
                id: Uuid::new_v4(),
                company_id: Uuid::nil(),
                driver_id: Uuid::nil(),
                deduction_type: DeductionType::Other,
                description: String::new(),
                amount: cents(*c),
                date: day(),
            })
            .collect(),
    }
}

fn period() -> StatementPeriod {
    StatementPeriod::new(day(), day()).unwrap()
}

proptest! {
    #[test]
    fn test_trip_total_is_sum_of_amounts(
        amounts in prop::collection::vec(0u32..1_000_000u32, 0..40)
    ) {
        let activity = activity(&amounts, &[], &[], &[]);
        let expected: Decimal = amounts.iter().map(|c| cents(*c)).sum();

        prop_assert_eq!(PayStatementAggregator::trip_total(&activity.trips).unwrap(), expected);
    }

    #[test]
    fn test_net_pay_reconciles(
        trips in prop::collection::vec(0u32..500_000u32, 0..20),
        expenses in prop::collection::vec(0u32..50_000u32, 0..10),
        advances in prop::collection::vec(0u32..50_000u32, 0..5),
        deductions in prop::collection::vec(0u32..50_000u32, 0..5),
        percent in 0u32..=100u32
    ) {
        let statement = PayStatementAggregator::generate(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Driver",
            period(),
            activity(&trips, &expenses, &advances, &deductions),
            Decimal::from(percent),
        )
        .unwrap();

        prop_assert_eq!(statement.gross_pay, statement.trip_total);
        prop_assert_eq!(
            statement.net_pay,
            statement.gross_pay
                - statement.expense_total
                - statement.cash_advance_total
                - statement.tax_withholding
                - statement.deductions_total
        );
        prop_assert!(statement.tax_withholding <= statement.gross_pay);

        let items = PayStatementAggregator::line_items(&statement);
        prop_assert_eq!(items.len(), trips.len() + expenses.len() + advances.len() + deductions.len() + 1);
        let sum: Decimal = items.iter().map(|i| i.amount).sum();
        prop_assert_eq!(sum, statement.net_pay);
    }

    #[test]
    fn test_zero_gross_withholds_nothing(percent_hundredths in 0u32..=10_000u32) {
        let percent = Decimal::new(percent_hundredths as i64, 2);
        prop_assert_eq!(
            PayStatementAggregator::tax_withholding(Decimal::ZERO, percent).unwrap(),
            Decimal::ZERO
        );
    }
}

#[test]
fn test_end_to_end_example() {
    // trips 555.75, expenses 214.00, advances 200.00, deductions 205.75, 15%
    let statement = PayStatementAggregator::generate(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Driver",
        period(),
        activity(&[24700, 30875], &[21400], &[10000, 10000], &[20575]),
        Decimal::from(15),
    )
    .unwrap();

    assert_eq!(statement.gross_pay, cents(55575));
    assert_eq!(statement.tax_withholding, cents(8336));
    assert_eq!(statement.net_pay, -cents(14736));
}
