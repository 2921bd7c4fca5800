pub mod expense_repository;

pub use expense_repository::{ExpenseRepository, InMemoryExpenseRepository};
