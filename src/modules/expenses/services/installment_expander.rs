use chrono::Months;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::expenses::models::{ExpenseRecord, ExpenseStatus, ExpenseSubmission, PaymentMode};

/// Expands a validated expense submission into concrete expense records
///
/// Pure computation: no identifiers are assigned and nothing is persisted;
/// both are the storage collaborator's job.
pub struct InstallmentExpander;

impl InstallmentExpander {
    /// Expand a submission into its expense records
    ///
    /// A `Single` submission yields exactly one record due on the submitted
    /// date. An `Installment` submission with count N yields N records, one
    /// per calendar month starting at the submitted date, each carrying the
    /// per-installment value (the total payable is value * N). The day of
    /// month is preserved; when a target month is shorter, the date clamps to
    /// its last day, so expansion is deterministic.
    ///
    /// An installment count of 1 is clamped up to 2, matching the expense
    /// form's behavior. Counts below 1 are rejected.
    ///
    /// # Errors
    /// * `InvalidAmount` when the value is not strictly positive
    /// * `InvalidInstallmentCount` when an installment submission carries a
    ///   count below 1
    pub fn expand(submission: &ExpenseSubmission) -> Result<Vec<ExpenseRecord>> {
        if submission.value <= Decimal::ZERO {
            return Err(AppError::invalid_amount(format!(
                "Expense value must be positive, got {}",
                submission.value
            )));
        }

        let count = match submission.payment_mode {
            PaymentMode::Single => 1,
            PaymentMode::Installment => {
                if submission.installment_count < 1 {
                    return Err(AppError::invalid_installment_count(format!(
                        "Installment count must be a positive integer, got {}",
                        submission.installment_count
                    )));
                }
                // The form clamps a count of 1 up to the 2-installment minimum
                submission.installment_count.max(2)
            }
        };

        info!(
            mode = %submission.payment_mode,
            count,
            value = %submission.value,
            due_date = %submission.due_date,
            "Expanding expense submission"
        );

        let mut records = Vec::with_capacity(count as usize);

        for number in 1..=count {
            let due_date = submission
                .due_date
                .checked_add_months(Months::new(number as u32 - 1))
                .ok_or_else(|| {
                    AppError::invalid_date(format!(
                        "Due date overflow advancing {} by {} months",
                        submission.due_date,
                        number - 1
                    ))
                })?;

            records.push(ExpenseRecord::new(
                due_date,
                submission.category.clone(),
                submission.description.clone(),
                submission.value,
                ExpenseStatus::Pending,
                submission.payment_mode,
                number,
                count,
            )?);
        }

        Ok(records)
    }
}
