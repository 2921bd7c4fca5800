pub mod expense_service;
pub mod installment_expander;

pub use expense_service::ExpenseService;
pub use installment_expander::InstallmentExpander;
