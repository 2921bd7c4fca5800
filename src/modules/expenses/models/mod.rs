pub mod expense;
pub mod filter;

pub use expense::{
    ExpenseRecord, ExpenseStatus, ExpenseSubmission, PaymentMode, UNASSIGNED_ID,
};
pub use filter::{DateRange, ExpenseFilter};
