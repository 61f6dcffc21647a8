use crate::common::money::Money;

/// Recoverable failures raised by ledger operations. None of these leave the
/// account in a modified state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Transaction limit reached! Cannot add more transactions.")]
    CapacityExceeded { capacity: usize },
    #[error("posting {amount} would overflow the balance of {balance}")]
    BalanceOverflow { balance: Money, amount: Money },
    #[error("balance cannot be negative: {0}")]
    InvalidBalance(Money),
    #[error("recurrence count must be at least 1")]
    InvalidRecurrence,
    #[error("interest rate must be a non-negative percentage, got {0}")]
    InvalidInterestRate(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
