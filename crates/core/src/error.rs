//! # Error Module
//!
//! Domain errors for account operations, built on thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Account domain errors.
///
/// Every error is local and recoverable: the account that produced it is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid interest rate: {0} (must be >= 0)")]
    InvalidRate(Decimal),

    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    #[error("Balance overflow: {0}")]
    Overflow(String),
}

/// Result type alias với AccountError
pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    pub(crate) fn non_positive(operation: &str, amount: Decimal) -> Self {
        AccountError::InvalidArgument(format!("{operation} amount must be positive: {amount}"))
    }

    /// Kiểm tra có phải lỗi insufficient funds không
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, AccountError::InsufficientFunds { .. })
    }

    /// Kiểm tra có phải lỗi overflow không
    pub fn is_overflow(&self) -> bool {
        matches!(self, AccountError::Overflow(_))
    }

    /// Kiểm tra có phải lỗi invalid argument không
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AccountError::InvalidArgument(_))
    }
}
