// Property-based tests for trip pricing
//
// - per_mile: distance × rate, rounded to cents
// - percentage: (distance × 2) × rate / 100, rounded to cents
// - hourly: hours × rate, zero without hours
// - fixed: rate unchanged

use fleetpay::core::AppError;
use fleetpay::trips::{RateType, TripPricing};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Distances in tenths of a mile, rates in thousandths
fn distance(tenths: u32) -> Decimal {
    Decimal::new(tenths as i64, 1)
}

fn rate(thousandths: u32) -> Decimal {
    Decimal::new(thousandths as i64, 3)
}

proptest! {
    #[test]
    fn test_per_mile_has_cent_precision(
        tenths in 0u32..50_000u32,
        thousandths in 0u32..5_000u32
    ) {
        let pricing = TripPricing::new();
        let amount = pricing
            .calculate_amount(RateType::PerMile, distance(tenths), rate(thousandths), None)
            .unwrap();

        prop_assert!(amount.scale() <= 2, "amount {} has more than 2 decimals", amount);
        prop_assert!(amount >= Decimal::ZERO);

        let exact = distance(tenths) * rate(thousandths);
        prop_assert!((amount - exact).abs() <= dec!(0.005), "amount {} too far from {}", amount, exact);
    }

    #[test]
    fn test_percentage_matches_per_mile_at_double_rate(
        tenths in 0u32..50_000u32,
        percent in 0u32..=100u32
    ) {
        let pricing = TripPricing::new();
        let d = distance(tenths);
        let p = Decimal::from(percent);

        // (d × 2) × p / 100 == d × (p / 50)
        let by_percentage = pricing.calculate_amount(RateType::Percentage, d, p, None).unwrap();
        let by_mile = pricing
            .calculate_amount(RateType::PerMile, d, p / Decimal::from(50), None)
            .unwrap();

        prop_assert_eq!(by_percentage, by_mile);
    }

    #[test]
    fn test_hourly_is_hours_times_rate(
        quarter_hours in 0u32..400u32,
        cents in 0u32..20_000u32
    ) {
        let pricing = TripPricing::new();
        let hours = Decimal::new(quarter_hours as i64 * 25, 2);
        let hourly_rate = Decimal::new(cents as i64, 2);

        prop_assert_eq!(
            pricing.calculate_amount(RateType::Hourly, dec!(0), hourly_rate, Some(hours)).unwrap(),
            hours * hourly_rate
        );
        prop_assert_eq!(
            pricing.calculate_amount(RateType::Hourly, dec!(0), hourly_rate, None).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_fixed_and_unknown_ignore_distance(
        tenths in 0u32..50_000u32,
        cents in 0u32..500_000u32
    ) {
        let pricing = TripPricing::new();
        let flat = Decimal::new(cents as i64, 2);

        prop_assert_eq!(
            pricing.calculate_amount(RateType::Fixed, distance(tenths), flat, None).unwrap(),
            flat
        );
        prop_assert_eq!(
            pricing
                .calculate_amount(RateType::Unknown, distance(tenths), flat, Some(dec!(3)))
                .unwrap(),
            Decimal::ZERO
        );
    }
}

#[test]
fn test_specific_trip_amounts() {
    let pricing = TripPricing::new();

    // 380 mi at 0.65/mi
    assert_eq!(
        pricing.calculate_amount(RateType::PerMile, dec!(380), dec!(0.65), None).unwrap(),
        dec!(247.00)
    );
    // 100 mi at 50% of a 200 base
    assert_eq!(
        pricing.calculate_amount(RateType::Percentage, dec!(100), dec!(50), None).unwrap(),
        dec!(100.00)
    );
    // 8 h at 20/h
    assert_eq!(
        pricing.calculate_amount(RateType::Hourly, dec!(0), dec!(20), Some(dec!(8))).unwrap(),
        dec!(160.00)
    );
    assert_eq!(
        pricing.calculate_amount(RateType::Hourly, dec!(0), dec!(20), None).unwrap(),
        dec!(0)
    );
}

#[test]
fn test_out_of_range_trip_is_rejected() {
    let pricing = TripPricing::new();

    let result = pricing.calculate_amount(RateType::PerMile, Decimal::MAX, dec!(2), None);
    assert!(matches!(result, Err(AppError::Validation(_))));
}
