//! Error types for account operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for account operations
pub type Result<T> = std::result::Result<T, AccountError>;

/// Broad contract classification of an [`AccountError`].
///
/// `InvalidArgument` means the input itself was malformed or out of
/// domain; `InvalidState` means the input was fine but the operation would
/// break an account invariant. In both cases the operation applied
/// nothing, and retrying without changing inputs cannot succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
}

/// Errors that can occur while opening or operating on an account.
#[derive(Error, Debug)]
pub enum AccountError {
    /// Opening balance negative or above the balance ceiling
    #[error("invalid opening balance: {0:.2}")]
    InvalidInitialBalance(Decimal),

    /// Creation date in the future or before the minimum year
    #[error("invalid creation date: {0}")]
    InvalidCreationDate(NaiveDate),

    /// Overdraft limit positive or below the overdraft floor
    #[error("invalid overdraft limit: {0:.2}")]
    InvalidOverdraftLimit(Decimal),

    /// Negative amount passed to a deposit, withdrawal, or transfer
    #[error("invalid amount: {0:.2}")]
    NegativeAmount(Decimal),

    /// Garnishment rate outside `(0, 100]`
    #[error("invalid garnishment rate: {0:.2}")]
    InvalidGarnishRate(Decimal),

    /// A garnishment is already in place
    #[error("account is already garnished")]
    AlreadyGarnished,

    /// Deposit would leave the balance above the ceiling
    #[error("balance ceiling exceeded, deposit would leave {0:.2}")]
    BalanceCeilingExceeded(Decimal),

    /// Withdrawal would leave the balance below the overdraft limit
    #[error("overdraft limit exceeded, withdrawal would leave {0:.2}")]
    OverdraftLimitExceeded(Decimal),

    /// Transfer amount not covered by the source's effective balance
    #[error("amount not available in source account, effective balance {0:.2}")]
    InsufficientFunds(Decimal),

    /// Transfer would leave the destination above the ceiling
    #[error("destination ceiling exceeded, transfer would leave {0:.2}")]
    DestinationCeilingExceeded(Decimal),
}

impl AccountError {
    /// Classifies this error into the two contract kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidInitialBalance(_)
            | AccountError::InvalidCreationDate(_)
            | AccountError::InvalidOverdraftLimit(_)
            | AccountError::NegativeAmount(_)
            | AccountError::InvalidGarnishRate(_) => ErrorKind::InvalidArgument,

            AccountError::AlreadyGarnished
            | AccountError::BalanceCeilingExceeded(_)
            | AccountError::OverdraftLimitExceeded(_)
            | AccountError::InsufficientFunds(_)
            | AccountError::DestinationCeilingExceeded(_) => ErrorKind::InvalidState,
        }
    }
}
