//! Account model
//!
//! A bank account: holder name, user-assigned number and current balance.

use serde::Serialize;
use std::fmt;

use super::ids::AccountNumber;
use super::money::Money;

/// Longest accepted holder name, in characters
pub const MAX_NAME_LEN: usize = 49;

/// A bank account
///
/// `name` and `number` are fixed at creation; only the balance changes, and
/// only through [`AccountStore`](crate::storage::AccountStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    name: String,
    number: AccountNumber,
    balance: Money,
}

impl Account {
    /// Create a validated account
    pub fn new(
        name: impl Into<String>,
        number: AccountNumber,
        balance: Money,
    ) -> Result<Self, AccountValidationError> {
        let account = Self {
            name: name.into(),
            number,
            balance,
        };
        account.validate()?;
        Ok(account)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub(crate) fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        validate_name(&self.name)?;

        if self.balance.is_negative() {
            return Err(AccountValidationError::NegativeBalance(self.balance));
        }

        Ok(())
    }
}

/// Check that a holder name is a single, reasonably short token
pub fn validate_name(name: &str) -> Result<(), AccountValidationError> {
    if name.is_empty() {
        return Err(AccountValidationError::EmptyName);
    }

    if name.chars().any(char::is_whitespace) {
        return Err(AccountValidationError::NameContainsWhitespace);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(AccountValidationError::NameTooLong(len));
    }

    Ok(())
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.number)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameContainsWhitespace,
    NameTooLong(usize),
    NegativeBalance(Money),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account holder name cannot be empty"),
            Self::NameContainsWhitespace => {
                write!(f, "Account holder name cannot contain spaces")
            }
            Self::NameTooLong(len) => {
                write!(
                    f,
                    "Account holder name too long ({} chars, max {})",
                    len, MAX_NAME_LEN
                )
            }
            Self::NegativeBalance(balance) => {
                write!(f, "Balance cannot be negative ({})", balance)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
