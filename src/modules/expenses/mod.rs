pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DateRange, ExpenseFilter, ExpenseRecord, ExpenseStatus, ExpenseSubmission, PaymentMode};
pub use repositories::{ExpenseRepository, InMemoryExpenseRepository};
pub use services::{ExpenseService, InstallmentExpander};
