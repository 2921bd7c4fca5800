// Property-based tests for the installment expander.

use chrono::{Datelike, NaiveDate};
use fluxo::expenses::models::{ExpenseStatus, ExpenseSubmission, PaymentMode};
use fluxo::expenses::services::InstallmentExpander;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn submission(value: Decimal, due: NaiveDate, count: i32) -> ExpenseSubmission {
    ExpenseSubmission::new(
        value,
        due,
        "Investimento",
        "Notebooks",
        PaymentMode::Installment,
        count,
    )
}

/// The concrete scenario from the expense form: 1200 in 4 installments
#[test]
fn test_four_installments_of_1200() {
    let due = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
    let records = InstallmentExpander::expand(&submission(dec!(1200), due, 4))
        .expect("Failed to expand submission");

    assert_eq!(records.len(), 4);

    let expected_dates = ["2025-04-10", "2025-05-10", "2025-06-10", "2025-07-10"];
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.due_date.to_string(), expected_dates[i]);
        assert_eq!(record.value, dec!(1200));
        assert_eq!(record.installment_number, i as i32 + 1);
        assert_eq!(record.installment_total, 4);
        assert_eq!(record.status, ExpenseStatus::Pending);
    }

    let total: Decimal = records.iter().map(|r| r.value).sum();
    assert_eq!(total, dec!(4800), "Total payable must be value * count");
}

/// Single-mode submissions always collapse to one 1-of-1 record
#[test]
fn test_single_mode_is_one_record() {
    let due = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
    let single = ExpenseSubmission::new(
        dec!(99.90),
        due,
        "Variável",
        "Material de escritório",
        PaymentMode::Single,
        // Count on a single submission carries no meaning
        7,
    );

    let records = InstallmentExpander::expand(&single).expect("Failed to expand submission");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].installment_number, 1);
    assert_eq!(records[0].installment_total, 1);
    assert_eq!(records[0].due_date, due);
}

/// The form's clamping rule: installment mode with count 1 becomes 2
#[test]
fn test_count_of_one_is_clamped_to_two() {
    let due = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
    let records = InstallmentExpander::expand(&submission(dec!(500), due, 1))
        .expect("Failed to expand submission");

    assert_eq!(records.len(), 2, "Count below the minimum must clamp to 2");
    assert!(records.iter().all(|r| r.installment_total == 2));
}

proptest! {
    /// Property: N installments, value sum exactly value * N
    #[test]
    fn prop_expansion_preserves_total(
        cents in 1u64..10_000_000u64,
        count in 2i32..=48,
        year in 2020i32..2030,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let value = Decimal::from(cents) / Decimal::from(100);
        let due = NaiveDate::from_ymd_opt(year, month, day).unwrap();

        let records = InstallmentExpander::expand(&submission(value, due, count))
            .expect("Failed to expand submission");

        prop_assert_eq!(records.len(), count as usize);

        let total: Decimal = records.iter().map(|r| r.value).sum();
        prop_assert_eq!(total, value * Decimal::from(count));
    }

    /// Property: positions are exactly 1..=N with no repeats
    #[test]
    fn prop_positions_are_exact(
        count in 2i32..=48,
        day in 1u32..=28,
    ) {
        let due = NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
        let records = InstallmentExpander::expand(&submission(dec!(100), due, count))
            .expect("Failed to expand submission");

        let positions: Vec<i32> = records.iter().map(|r| r.installment_number).collect();
        let expected: Vec<i32> = (1..=count).collect();
        prop_assert_eq!(positions, expected);
        prop_assert!(records.iter().all(|r| r.installment_total == count));
    }

    /// Property: due dates advance strictly, one calendar month at a time
    #[test]
    fn prop_due_dates_strictly_increase_by_month(
        count in 2i32..=48,
        year in 2020i32..2030,
        month in 1u32..=12,
        day in 1u32..=31,
    ) {
        prop_assume!(NaiveDate::from_ymd_opt(year, month, day).is_some());
        let due = NaiveDate::from_ymd_opt(year, month, day).unwrap();

        let records = InstallmentExpander::expand(&submission(dec!(100), due, count))
            .expect("Failed to expand submission");

        for pair in records.windows(2) {
            prop_assert!(pair[0].due_date < pair[1].due_date);

            let next_month = (pair[0].due_date.year() * 12 + pair[0].due_date.month0() as i32) + 1;
            let got_month = pair[1].due_date.year() * 12 + pair[1].due_date.month0() as i32;
            prop_assert_eq!(got_month, next_month, "Months must advance one at a time");
        }

        // Day of month never exceeds the submitted day (clamping only shrinks)
        prop_assert!(records.iter().all(|r| r.due_date.day() <= day));
    }

    /// Property: siblings share everything except due date and position
    #[test]
    fn prop_siblings_share_submission_fields(count in 2i32..=24) {
        let due = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let records = InstallmentExpander::expand(&submission(dec!(1200), due, count))
            .expect("Failed to expand submission");

        for record in &records {
            prop_assert_eq!(&record.category, "Investimento");
            prop_assert_eq!(&record.description, "Notebooks");
            prop_assert_eq!(record.value, dec!(1200));
            prop_assert_eq!(record.payment_mode, PaymentMode::Installment);
        }
    }
}
