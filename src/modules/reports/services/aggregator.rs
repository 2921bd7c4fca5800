use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::modules::expenses::models::{ExpenseFilter, ExpenseRecord};
use crate::modules::reports::models::{AggregateReport, CategoryTotal, MonthlyTotal};

/// Computes summary statistics over an expense collection
///
/// Pure with respect to the wall clock: the current-month bucket is driven by
/// the caller-supplied `reference_date`, never by `Utc::now()` read here.
pub struct Aggregator;

impl Aggregator {
    /// Aggregate a record collection into a report
    ///
    /// Records are first filtered (order-preserving; a `None` filter keeps
    /// everything), then summed into the total, per-category and per-month
    /// groupings, the reference month's total, and per-status counts.
    /// Categories and months appear in the order they are first encountered.
    ///
    /// Empty input is not an error: the result has zero totals, empty
    /// groupings, and three zero status counts.
    pub fn aggregate(
        records: &[ExpenseRecord],
        filter: Option<&ExpenseFilter>,
        reference_date: NaiveDate,
    ) -> AggregateReport {
        let reference_month = reference_date.format("%Y-%m").to_string();
        let mut report = AggregateReport::empty();

        let surviving = records
            .iter()
            .filter(|record| filter.map_or(true, |f| f.matches(record)));

        let mut count = 0usize;
        for record in surviving {
            count += 1;
            report.total_value += record.value;

            match report
                .by_category
                .iter_mut()
                .find(|c| c.category == record.category)
            {
                Some(entry) => entry.total += record.value,
                None => report.by_category.push(CategoryTotal {
                    category: record.category.clone(),
                    total: record.value,
                }),
            }

            let month = record.month_key();
            match report.by_month.iter_mut().find(|m| m.month == month) {
                Some(entry) => entry.total += record.value,
                None => report.by_month.push(MonthlyTotal {
                    month: month.clone(),
                    total: record.value,
                }),
            }

            if month == reference_month {
                report.current_month_total += record.value;
            }

            // The bucket exists for all three statuses, see AggregateReport::empty
            if let Some(entry) = report
                .status_counts
                .iter_mut()
                .find(|s| s.status == record.status)
            {
                entry.count += 1;
            }
        }

        debug!(
            records = records.len(),
            surviving = count,
            total = %report.total_value,
            reference_month = %reference_month,
            "Aggregated expense records"
        );

        report
    }

    /// Sum of the values of the records a filter keeps
    ///
    /// Convenience for collaborators that only need the headline figure.
    pub fn filtered_total(records: &[ExpenseRecord], filter: &ExpenseFilter) -> Decimal {
        records
            .iter()
            .filter(|record| filter.matches(record))
            .map(|record| record.value)
            .sum()
    }
}
