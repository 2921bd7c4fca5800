pub mod expenses;
pub mod reports;
