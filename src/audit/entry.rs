//! Audit entry data structures
//!
//! Defines the operations that get audited and the shape of one log line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Account, AccountNumber, Money};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Account was opened
    Create,
    /// Money was paid in
    Deposit,
    /// Money was taken out
    Withdrawal,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Deposit => write!(f, "DEPOSIT"),
            Operation::Withdrawal => write!(f, "WITHDRAW"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub account_number: AccountNumber,

    pub account_name: String,

    /// Amount moved (the initial deposit for a create)
    pub amount: Money,

    /// Balance before the operation (absent for creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_before: Option<Money>,

    pub balance_after: Money,
}

impl AuditEntry {
    /// Entry for a newly opened account
    pub fn create(account: &Account) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            account_number: account.number(),
            account_name: account.name().to_string(),
            amount: account.balance(),
            balance_before: None,
            balance_after: account.balance(),
        }
    }

    /// Entry for a deposit; `account` is the post-deposit state
    pub fn deposit(account: &Account, amount: Money, balance_before: Money) -> Self {
        Self::movement(Operation::Deposit, account, amount, balance_before)
    }

    /// Entry for a withdrawal; `account` is the post-withdrawal state
    pub fn withdrawal(account: &Account, amount: Money, balance_before: Money) -> Self {
        Self::movement(Operation::Withdrawal, account, amount, balance_before)
    }

    fn movement(
        operation: Operation,
        account: &Account,
        amount: Money,
        balance_before: Money,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            account_number: account.number(),
            account_name: account.name().to_string(),
            amount,
            balance_before: Some(balance_before),
            balance_after: account.balance(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} #{} ({}) {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.account_number,
            self.account_name,
            self.amount
        );

        match self.balance_before {
            Some(before) => {
                output.push_str(&format!(" balance {} -> {}", before, self.balance_after))
            }
            None => output.push_str(&format!(" balance {}", self.balance_after)),
        }

        output
    }
}
