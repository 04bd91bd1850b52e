//! Core data models for bank-cli
//!
//! Accounts, their user-assigned numbers, and the money type balances are
//! kept in.

pub mod account;
pub mod ids;
pub mod money;

pub use account::{Account, AccountValidationError};
pub use ids::AccountNumber;
pub use money::{Money, MoneyParseError};
