// Printable layout of a pay statement.
//
// The layout is renderer-agnostic: plain strings arranged into a header,
// a totals summary and one itemized table per record type. Renderers decide
// fonts, pagination and framing.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::format_money;
use crate::modules::pay_statements::models::{PayStatement, PayStatementStatus};
use crate::modules::trips::{RateType, Trip};

pub const DOCUMENT_TITLE: &str = "Driver Pay Statement";
pub const EMPTY_TABLE_TEXT: &str = "No records";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub amount: String,
    /// Rendered bold (gross and net pay)
    pub emphasis: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentTable {
    pub title: String,
    pub columns: Vec<String>,
    /// Relative column widths, one per column
    pub column_weights: Vec<usize>,
    pub rows: Vec<Vec<String>>,
    pub total: String,
}

impl DocumentTable {
    fn new(title: &str, columns: &[(&str, usize)]) -> Self {
        Self {
            title: title.to_string(),
            columns: columns.iter().map(|(c, _)| c.to_string()).collect(),
            column_weights: columns.iter().map(|(_, w)| *w).collect(),
            rows: Vec::new(),
            total: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Structured input for a document renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementDocument {
    pub title: String,
    /// Label/value pairs printed under the title
    pub header: Vec<(String, String)>,
    pub summary: Vec<SummaryRow>,
    pub tables: Vec<DocumentTable>,
}

impl StatementDocument {
    pub fn from_statement(statement: &PayStatement) -> Self {
        let mut header = vec![
            ("Driver".to_string(), statement.driver_name.clone()),
            (
                "Pay Period".to_string(),
                format!(
                    "{} - {}",
                    statement.period_start.format("%b %d, %Y"),
                    statement.period_end.format("%b %d, %Y")
                ),
            ),
            (
                "Generated".to_string(),
                statement.generated_date.format("%b %d, %Y").to_string(),
            ),
            ("Status".to_string(), status_label(statement.status).to_string()),
        ];
        if let Some(id) = statement.id {
            header.push(("Statement".to_string(), id.to_string()));
        }

        Self {
            title: DOCUMENT_TITLE.to_string(),
            header,
            summary: summary_rows(statement),
            tables: vec![
                trips_table(statement),
                expenses_table(statement),
                cash_advances_table(statement),
                deductions_table(statement),
            ],
        }
    }
}

fn summary_rows(statement: &PayStatement) -> Vec<SummaryRow> {
    let row = |label: String, amount: Decimal, emphasis: bool| SummaryRow {
        label,
        amount: format_money(amount),
        emphasis,
    };

    vec![
        row("Trip Earnings".to_string(), statement.trip_total, false),
        row("Gross Pay".to_string(), statement.gross_pay, true),
        row("Expenses".to_string(), -statement.expense_total, false),
        row("Cash Advances".to_string(), -statement.cash_advance_total, false),
        row(
            format!("Tax Withholding ({}%)", statement.tax_percent.normalize()),
            -statement.tax_withholding,
            false,
        ),
        row("Deductions".to_string(), -statement.deductions_total, false),
        row("Net Pay".to_string(), statement.net_pay, true),
    ]
}

fn trips_table(statement: &PayStatement) -> DocumentTable {
    let mut table = DocumentTable::new(
        "Trips",
        &[("Date", 2), ("Route", 5), ("Distance", 2), ("Rate", 3), ("Amount", 2)],
    );
    table.rows = statement
        .trips
        .iter()
        .map(|t| {
            vec![
                t.date.format("%m/%d/%Y").to_string(),
                t.route(),
                format!("{} mi", t.distance.normalize()),
                rate_label(t),
                format_money(t.amount),
            ]
        })
        .collect();
    table.total = format_money(statement.trip_total);
    table
}

fn expenses_table(statement: &PayStatement) -> DocumentTable {
    let mut table = DocumentTable::new(
        "Expenses",
        &[("Date", 2), ("Category", 3), ("Description", 7), ("Amount", 2)],
    );
    table.rows = statement
        .expenses
        .iter()
        .map(|e| {
            vec![
                e.date.format("%m/%d/%Y").to_string(),
                e.category.clone(),
                e.description.clone(),
                format_money(e.amount),
            ]
        })
        .collect();
    table.total = format_money(statement.expense_total);
    table
}

fn cash_advances_table(statement: &PayStatement) -> DocumentTable {
    let mut table = DocumentTable::new(
        "Cash Advances",
        &[("Date", 2), ("Description", 8), ("Status", 2), ("Amount", 2)],
    );
    table.rows = statement
        .cash_advances
        .iter()
        .map(|a| {
            vec![
                a.date.format("%m/%d/%Y").to_string(),
                a.description.clone(),
                format!("{:?}", a.status),
                format_money(a.amount),
            ]
        })
        .collect();
    table.total = format_money(statement.cash_advance_total);
    table
}

fn deductions_table(statement: &PayStatement) -> DocumentTable {
    let mut table = DocumentTable::new(
        "Deductions",
        &[("Date", 2), ("Type", 2), ("Description", 8), ("Amount", 2)],
    );
    table.rows = statement
        .deductions
        .iter()
        .map(|d| {
            vec![
                d.date.format("%m/%d/%Y").to_string(),
                d.deduction_type.to_string(),
                d.description.clone(),
                format_money(d.amount),
            ]
        })
        .collect();
    table.total = format_money(statement.deductions_total);
    table
}

fn rate_label(trip: &Trip) -> String {
    match trip.rate_type {
        RateType::PerMile => format!("{}/mi", format_money(trip.rate)),
        RateType::Percentage => format!("{}%", trip.rate.normalize()),
        RateType::Hourly => match trip.hours_worked {
            Some(hours) => format!("{}/hr x {}", format_money(trip.rate), hours.normalize()),
            None => format!("{}/hr", format_money(trip.rate)),
        },
        RateType::Fixed => format!("Flat {}", format_money(trip.rate)),
        RateType::Unknown => "-".to_string(),
    }
}

fn status_label(status: PayStatementStatus) -> &'static str {
    match status {
        PayStatementStatus::Draft => "Draft",
        PayStatementStatus::Finalized => "Finalized",
        PayStatementStatus::Paid => "Paid",
    }
}
