use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::expenses::models::{ExpenseRecord, ExpenseStatus};

/// Inclusive due-date range; both bounds are always present together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Create a date range, rejecting inverted bounds
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(AppError::validation(format!(
                "Range start ({}) must be before or equal to range end ({})",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Query filter over expense records
///
/// Every field left unset matches all records. An unset category is not the
/// same as an empty-string category; the latter is a valid grouping key and
/// only matches records whose category is itself the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Inclusive due-date range
    pub date_range: Option<DateRange>,
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring match on the description
    pub description: Option<String>,
    /// Exact status match
    pub status: Option<ExpenseStatus>,
}

impl ExpenseFilter {
    /// Filter matching every record
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Result<Self> {
        self.date_range = Some(DateRange::new(from, to)?);
        Ok(self)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, fragment: impl Into<String>) -> Self {
        self.description = Some(fragment.into());
        self
    }

    pub fn with_status(mut self, status: ExpenseStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Check a record against every set predicate
    ///
    /// Predicates are independent and commutative; a record survives only if
    /// all set predicates accept it.
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        if let Some(range) = &self.date_range {
            if !range.contains(record.due_date) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if record.category != *category {
                return false;
            }
        }

        if let Some(fragment) = &self.description {
            let haystack = record.description.to_lowercase();
            if !haystack.contains(&fragment.to_lowercase()) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }

        true
    }
}
