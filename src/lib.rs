//! Fluxo Small-Business Expense Core Library
//!
//! This library provides the business core of the Fluxo financial management
//! application: installment-expense expansion, reporting aggregation, and the
//! storage-collaborator seam they sit behind.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::expenses;
pub use modules::reports;
