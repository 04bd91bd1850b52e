//! Custom error types for bank-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{AccountNumber, Money};

/// The main error type for bank-cli operations
#[derive(Error, Debug)]
pub enum BankError {
    /// No account carries the requested number
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    /// An account with this number already exists
    #[error("Account number already exists: {0}")]
    DuplicateAccountNumber(AccountNumber),

    /// The store holds the maximum number of accounts
    #[error("Maximum account limit reached ({capacity} accounts)")]
    StoreFull { capacity: usize },

    /// Non-positive deposit/withdrawal or negative initial deposit
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Withdrawal larger than the current balance
    #[error("Insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance { available: Money, requested: Money },

    /// The persistence file could not be written
    #[error("Unable to save data to file: {0}")]
    PersistenceUnavailable(String),

    /// The persistence file exists but does not follow the record format
    #[error("Corrupt data file at line {line}: {reason}")]
    CorruptPersistenceFile { line: usize, reason: String },

    /// A console token did not parse as the expected type
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The console input closed while a prompt was waiting
    #[error("Unexpected end of input")]
    EndOfInput,

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl BankError {
    /// Create a corrupt-file error for the given 1-based line
    pub fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        Self::CorruptPersistenceFile {
            line,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for bank-cli operations
pub type BankResult<T> = Result<T, BankError>;
