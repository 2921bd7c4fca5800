use std::fmt;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Monetary value is missing, non-numeric, or not strictly positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Due date is missing or cannot be parsed as a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Installment count cannot produce a valid installment plan
    #[error("Invalid installment count: {0}")]
    InvalidInstallmentCount(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stable machine-readable error kind, for callers mapping failures
/// onto form-level UI messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidAmount,
    InvalidDate,
    InvalidInstallmentCount,
    NotFound,
    Validation,
    Json,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidAmount => "invalid_amount",
            Self::InvalidDate => "invalid_date",
            Self::InvalidInstallmentCount => "invalid_installment_count",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Json => "json",
        };
        write!(f, "{}", name)
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        AppError::InvalidAmount(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        AppError::InvalidDate(msg.into())
    }

    pub fn invalid_installment_count(msg: impl Into<String>) -> Self {
        AppError::InvalidInstallmentCount(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidAmount(_) => ErrorKind::InvalidAmount,
            AppError::InvalidDate(_) => ErrorKind::InvalidDate,
            AppError::InvalidInstallmentCount(_) => ErrorKind::InvalidInstallmentCount,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Json(_) => ErrorKind::Json,
        }
    }
}
