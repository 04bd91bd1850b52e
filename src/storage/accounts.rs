//! In-memory account store
//!
//! An insertion-ordered, capacity-bounded list of accounts with linear lookup
//! by account number.

use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountNumber, Money};

/// Default maximum number of accounts a store will hold
pub const MAX_ACCOUNTS: usize = 100;

/// Ordered account table
#[derive(Debug, Clone)]
pub struct AccountStore {
    accounts: Vec<Account>,
    capacity: usize,
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore {
    /// Create an empty store holding up to [`MAX_ACCOUNTS`]
    pub fn new() -> Self {
        Self::with_capacity(MAX_ACCOUNTS)
    }

    /// Create an empty store holding up to `capacity` accounts
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            accounts: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.accounts.len() >= self.capacity
    }

    /// Index of the first account with this number
    pub fn find(&self, number: AccountNumber) -> Option<usize> {
        self.accounts.iter().position(|a| a.number() == number)
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.find(number).is_some()
    }

    /// Get an account by number
    pub fn get(&self, number: AccountNumber) -> BankResult<&Account> {
        self.find(number)
            .map(|index| &self.accounts[index])
            .ok_or(BankError::AccountNotFound(number))
    }

    /// Get an account by position
    pub fn at(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    /// Append an account, enforcing capacity and number uniqueness
    pub fn insert(&mut self, account: Account) -> BankResult<usize> {
        if self.is_full() {
            return Err(BankError::StoreFull {
                capacity: self.capacity,
            });
        }

        if self.contains(account.number()) {
            return Err(BankError::DuplicateAccountNumber(account.number()));
        }

        self.accounts.push(account);
        Ok(self.accounts.len() - 1)
    }

    /// Add `amount` to the balance of the account at `index`
    pub fn credit(&mut self, index: usize, amount: Money) -> BankResult<&Account> {
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount(format!(
                "deposit amount must be positive, got {}",
                amount
            )));
        }

        let account = self.account_mut(index)?;
        let balance = account
            .balance()
            .checked_add(amount)
            .ok_or_else(|| BankError::InvalidAmount(format!("{} would overflow the balance", amount)))?;
        account.set_balance(balance);
        Ok(account)
    }

    /// Subtract `amount` from the balance of the account at `index`
    pub fn debit(&mut self, index: usize, amount: Money) -> BankResult<&Account> {
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount(format!(
                "withdrawal amount must be positive, got {}",
                amount
            )));
        }

        let account = self.account_mut(index)?;
        let available = account.balance();
        if amount > available {
            return Err(BankError::InsufficientBalance {
                available,
                requested: amount,
            });
        }

        account.set_balance(available.checked_sub(amount).unwrap_or_default());
        Ok(account)
    }

    /// Iterate accounts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Sum of all balances
    pub fn total_balance(&self) -> Money {
        self.accounts.iter().map(Account::balance).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.accounts.clear();
    }

    fn account_mut(&mut self, index: usize) -> BankResult<&mut Account> {
        self.accounts
            .get_mut(index)
            .ok_or_else(|| BankError::Validation(format!("no account at position {}", index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, number: i32, cents: i64) -> Account {
        Account::new(name, AccountNumber::new(number), Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = AccountStore::new();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), MAX_ACCOUNTS);
        assert_eq!(store.find(AccountNumber::new(1)), None);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut store = AccountStore::new();
        store.insert(account("Alice", 1001, 100)).unwrap();
        store.insert(account("Bob", 7, 200)).unwrap();
        store.insert(account("Carol", 500, 300)).unwrap();

        let names: Vec<_> = store.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(store.find(AccountNumber::new(500)), Some(2));
    }

    #[test]
    fn test_duplicate_number_rejected() {
        let mut store = AccountStore::new();
        store.insert(account("Alice", 1001, 100)).unwrap();

        let result = store.insert(account("Mallory", 1001, 999));
        assert!(matches!(result, Err(BankError::DuplicateAccountNumber(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.at(0).unwrap().name(), "Alice");
    }

    #[test]
    fn test_store_full() {
        let mut store = AccountStore::new();
        for n in 0..MAX_ACCOUNTS as i32 {
            store.insert(account("Holder", n, 0)).unwrap();
        }
        assert!(store.is_full());

        let result = store.insert(account("Late", 5000, 0));
        assert!(matches!(result, Err(BankError::StoreFull { capacity: 100 })));
        assert_eq!(store.len(), MAX_ACCOUNTS);
    }

    #[test]
    fn test_credit_and_debit() {
        let mut store = AccountStore::new();
        let index = store.insert(account("Alice", 1001, 10000)).unwrap();

        store.credit(index, Money::from_cents(5000)).unwrap();
        assert_eq!(store.at(index).unwrap().balance(), Money::from_cents(15000));

        store.debit(index, Money::from_cents(15000)).unwrap();
        assert_eq!(store.at(index).unwrap().balance(), Money::zero());
    }

    #[test]
    fn test_debit_beyond_balance_rejected() {
        let mut store = AccountStore::new();
        let index = store.insert(account("Alice", 1001, 15000)).unwrap();

        let result = store.debit(index, Money::from_cents(20000));
        assert!(matches!(result, Err(BankError::InsufficientBalance { .. })));
        assert_eq!(store.at(index).unwrap().balance(), Money::from_cents(15000));
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let mut store = AccountStore::new();
        let index = store.insert(account("Alice", 1001, 100)).unwrap();

        for cents in [0, -50] {
            assert!(matches!(
                store.credit(index, Money::from_cents(cents)),
                Err(BankError::InvalidAmount(_))
            ));
            assert!(matches!(
                store.debit(index, Money::from_cents(cents)),
                Err(BankError::InvalidAmount(_))
            ));
        }
        assert_eq!(store.at(index).unwrap().balance(), Money::from_cents(100));
    }

    #[test]
    fn test_get_missing_account() {
        let store = AccountStore::new();
        let err = store.get(AccountNumber::new(9)).unwrap_err();
        assert!(matches!(err, BankError::AccountNotFound(n) if n == AccountNumber::new(9)));
    }

    #[test]
    fn test_total_balance() {
        let mut store = AccountStore::new();
        store.insert(account("Alice", 1, 150)).unwrap();
        store.insert(account("Bob", 2, 250)).unwrap();
        assert_eq!(store.total_balance(), Money::from_cents(400));
    }
}
