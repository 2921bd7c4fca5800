use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::expenses::models::ExpenseStatus;

/// Summary statistics over a filtered expense collection
///
/// Derived on demand, never persisted; purely a function of the input
/// records, the filter, and the reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Sum of all surviving record values (each installment row counts once)
    pub total_value: Decimal,
    /// Per-category totals, in first-seen order
    pub by_category: Vec<CategoryTotal>,
    /// Per-month totals keyed `YYYY-MM`, in first-seen order
    pub by_month: Vec<MonthlyTotal>,
    /// Total for the month of the reference date
    pub current_month_total: Decimal,
    /// Record counts per status; all three statuses always present
    pub status_counts: Vec<StatusCount>,
}

/// Value total for one category (exact string key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Value total for one due-date month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Stable sortable month key, ISO `YYYY-MM`
    pub month: String,
    pub total: Decimal,
}

/// Record count for one status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: ExpenseStatus,
    pub count: i64,
}

impl AggregateReport {
    /// Empty report: zero totals, no groupings, three zero status counts
    pub fn empty() -> Self {
        Self {
            total_value: Decimal::ZERO,
            by_category: Vec::new(),
            by_month: Vec::new(),
            current_month_total: Decimal::ZERO,
            status_counts: ExpenseStatus::ALL
                .iter()
                .map(|&status| StatusCount { status, count: 0 })
                .collect(),
        }
    }

    /// Check whether any record contributed to the report
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty() && self.by_month.is_empty()
    }

    /// Total for one category, zero when absent
    pub fn category_total(&self, category: &str) -> Decimal {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
            .unwrap_or(Decimal::ZERO)
    }

    /// Total for one `YYYY-MM` month key, zero when absent
    pub fn month_total(&self, month: &str) -> Decimal {
        self.by_month
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.total)
            .unwrap_or(Decimal::ZERO)
    }

    /// Count for one status; the bucket always exists
    pub fn status_count(&self, status: ExpenseStatus) -> i64 {
        self.status_counts
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    /// Re-order the month series lexically, which for `YYYY-MM` keys is
    /// chronological order; the default is first-seen order
    pub fn sort_months(&mut self) {
        self.by_month.sort_by(|a, b| a.month.cmp(&b.month));
    }
}
