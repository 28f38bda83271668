use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Result};

/// Decimal places kept for monetary amounts (cents)
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to cents, half away from zero
///
/// - 83.3625 -> 83.36
/// - 0.125 -> 0.13
/// - -0.125 -> -0.13
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount * percent / 100`, unrounded
pub fn percent_of(amount: Decimal, percent: Decimal) -> Result<Decimal> {
    amount
        .checked_mul(percent)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow(format!("{}% of {}", percent, amount)))
}

/// `a * b`, failing instead of panicking when the product is out of range
pub fn checked_product(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| overflow(format!("{} * {}", a, b)))
}

/// Sums amounts, failing instead of panicking when the total is out of range
pub fn checked_sum<I>(what: &str, amounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or_else(|| overflow(what.to_string()))
}

fn overflow(what: String) -> AppError {
    AppError::validation(format!("Amount out of range: {}", what))
}

/// Formats an amount for display: `$1,234.56`, negatives as `-$147.36`
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{}", sign, grouped, cents)
}

/// Validates a percentage lies within 0..=100
pub fn validate_percent(percent: Decimal) -> std::result::Result<(), String> {
    if percent < Decimal::ZERO {
        return Err(format!("Percentage cannot be negative, got: {}", percent));
    }

    if percent > Decimal::ONE_HUNDRED {
        return Err(format!("Percentage cannot exceed 100, got: {}", percent));
    }

    Ok(())
}
