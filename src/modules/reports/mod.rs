pub mod models;
pub mod services;

pub use models::{AggregateReport, CategoryTotal, MonthlyTotal, StatusCount};
pub use services::Aggregator;
