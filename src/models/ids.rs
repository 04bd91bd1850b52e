//! Strongly-typed account number
//!
//! Account numbers are chosen by the user, not generated, so the wrapper only
//! guards against mixing them up with other integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// User-assigned account number, unique within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(i32);

impl AccountNumber {
    pub const fn new(number: i32) -> Self {
        Self(number)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
