pub mod aggregate_report;

pub use aggregate_report::{AggregateReport, CategoryTotal, MonthlyTotal, StatusCount};
