use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Payment status of a single expense record
///
/// Transitions are direct overwrites: any status may be set from any other,
/// including re-opening a cancelled record. There is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Payment completed
    Paid,
    /// Awaiting payment
    Pending,
    /// Written off, payment no longer expected
    Cancelled,
}

impl ExpenseStatus {
    /// The three known statuses, in display order
    pub const ALL: [ExpenseStatus; 3] = [Self::Paid, Self::Pending, Self::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for ExpenseStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "paid" => Ok(Self::Paid),
            "pending" => Ok(Self::Pending),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid expense status: {}", value)),
        }
    }
}

/// Whether an expense is due once or split across monthly installments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Due once, on the submitted date
    Single,
    /// Split into N equal monthly obligations
    Installment,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Installment => "installment",
        }
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for PaymentMode {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "single" => Ok(Self::Single),
            "installment" => Ok(Self::Installment),
            _ => Err(format!("Invalid payment mode: {}", value)),
        }
    }
}

/// A single persisted expense row
///
/// One submission in `Single` mode produces exactly one record; in
/// `Installment` mode it produces one record per monthly installment.
/// Sibling installments share category, description, value and mode,
/// differing only in due date and installment number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Store-assigned identifier; `UNASSIGNED_ID` until persisted
    pub id: i64,
    /// Payment due date
    pub due_date: NaiveDate,
    /// Category label, exact-match grouping key (open-ended set)
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Amount due for this record (per installment, not the plan total)
    pub value: Decimal,
    /// Current status
    pub status: ExpenseStatus,
    pub payment_mode: PaymentMode,
    /// Sequential number within the installment plan (1-based)
    pub installment_number: i32,
    /// Total installments in the plan (1 for single expenses)
    pub installment_total: i32,
}

/// Identifier value for records not yet handed to the store
pub const UNASSIGNED_ID: i64 = 0;

impl ExpenseRecord {
    /// Create a new expense record, validating the installment invariants
    ///
    /// Single expenses must carry installment number/total = 1/1. Installment
    /// expenses must carry a total of at least 2 and a number within the plan.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        due_date: NaiveDate,
        category: String,
        description: String,
        value: Decimal,
        status: ExpenseStatus,
        payment_mode: PaymentMode,
        installment_number: i32,
        installment_total: i32,
    ) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(AppError::invalid_amount(format!(
                "Expense value cannot be negative, got {}",
                value
            )));
        }

        match payment_mode {
            PaymentMode::Single => {
                if installment_number != 1 || installment_total != 1 {
                    return Err(AppError::validation(format!(
                        "Single expense must be installment 1 of 1, got {} of {}",
                        installment_number, installment_total
                    )));
                }
            }
            PaymentMode::Installment => {
                if installment_total < 2 {
                    return Err(AppError::invalid_installment_count(format!(
                        "Installment total must be at least 2, got {}",
                        installment_total
                    )));
                }
                if installment_number < 1 || installment_number > installment_total {
                    return Err(AppError::validation(format!(
                        "Installment number {} outside plan of {}",
                        installment_number, installment_total
                    )));
                }
            }
        }

        Ok(Self {
            id: UNASSIGNED_ID,
            due_date,
            category,
            description,
            value,
            status,
            payment_mode,
            installment_number,
            installment_total,
        })
    }

    /// Stable sortable month bucket for the due date (ISO `YYYY-MM`)
    pub fn month_key(&self) -> String {
        self.due_date.format("%Y-%m").to_string()
    }

    /// Overwrite the status; any status may replace any other
    pub fn set_status(&mut self, status: ExpenseStatus) {
        self.status = status;
    }

    pub fn is_installment(&self) -> bool {
        self.payment_mode == PaymentMode::Installment
    }

    /// Return the record with the given store-assigned identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Validated expense form input, as handed to the installment expander
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSubmission {
    /// Per-installment amount (total payable = value * installment count)
    pub value: Decimal,
    /// Due date of the first (or only) payment
    pub due_date: NaiveDate,
    pub category: String,
    pub description: String,
    pub payment_mode: PaymentMode,
    /// Requested installment count; ignored for `Single` submissions
    pub installment_count: i32,
}

impl ExpenseSubmission {
    /// Create a submission from already-typed values
    pub fn new(
        value: Decimal,
        due_date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        payment_mode: PaymentMode,
        installment_count: i32,
    ) -> Self {
        Self {
            value,
            due_date,
            category: category.into(),
            description: description.into(),
            payment_mode,
            installment_count,
        }
    }

    /// Parse a submission from raw form strings
    ///
    /// This is the single validation boundary for form input: a non-numeric
    /// value fails with `InvalidAmount`, an unparseable date (expected ISO
    /// `YYYY-MM-DD`) with `InvalidDate`, and a non-integer count with
    /// `InvalidInstallmentCount`. Range checks on the parsed values belong to
    /// the expander.
    pub fn parse(
        value: &str,
        due_date: &str,
        category: impl Into<String>,
        description: impl Into<String>,
        payment_mode: PaymentMode,
        installment_count: &str,
    ) -> Result<Self> {
        let value: Decimal = value
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_amount(format!("Not a number: {:?}", value)))?;

        let due_date: NaiveDate = due_date
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_date(format!("Not a calendar date: {:?}", due_date)))?;

        let installment_count: i32 = match payment_mode {
            // Count field is ignored for single expenses, tolerate anything
            PaymentMode::Single => 1,
            PaymentMode::Installment => installment_count.trim().parse().map_err(|_| {
                AppError::invalid_installment_count(format!(
                    "Not an integer: {:?}",
                    installment_count
                ))
            })?,
        };

        Ok(Self::new(
            value,
            due_date,
            category,
            description,
            payment_mode,
            installment_count,
        ))
    }
}
