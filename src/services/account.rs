//! Account service
//!
//! Provides business logic for the four banking operations: open an account,
//! deposit, withdraw, and balance enquiry. Every successful mutation rewrites
//! the data file and appends an audit entry.

use crate::audit::AuditEntry;
use crate::error::{BankError, BankResult};
use crate::models::account::validate_name;
use crate::models::{Account, AccountNumber, Money};
use crate::storage::Storage;

/// Service for account operations
pub struct AccountService<'a> {
    storage: &'a mut Storage,
}

/// Outcome of a successful mutating operation
#[derive(Debug)]
pub struct Receipt {
    /// Account state after the operation
    pub account: Account,
    /// Amount moved (initial deposit for a create)
    pub amount: Money,
    /// Failures that happened after the in-memory change was made
    pub warnings: Vec<BankError>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Fail with `StoreFull` if no more accounts can be opened
    pub fn ensure_capacity(&self) -> BankResult<()> {
        if self.storage.accounts.is_full() {
            return Err(BankError::StoreFull {
                capacity: self.storage.accounts.capacity(),
            });
        }
        Ok(())
    }

    /// Fail with `DuplicateAccountNumber` if the number is taken
    pub fn ensure_number_available(&self, number: AccountNumber) -> BankResult<()> {
        if self.storage.accounts.contains(number) {
            return Err(BankError::DuplicateAccountNumber(number));
        }
        Ok(())
    }

    /// Open a new account with an initial deposit
    pub fn create(
        &mut self,
        name: &str,
        number: AccountNumber,
        initial_deposit: Money,
    ) -> BankResult<Receipt> {
        self.ensure_capacity()?;
        validate_name(name).map_err(|e| BankError::Validation(e.to_string()))?;
        self.ensure_number_available(number)?;

        if initial_deposit.is_negative() {
            return Err(BankError::InvalidAmount(
                "initial deposit cannot be negative".into(),
            ));
        }

        let account = Account::new(name, number, initial_deposit)
            .map_err(|e| BankError::Validation(e.to_string()))?;
        self.storage.accounts.insert(account.clone())?;

        let warnings = self.commit(&AuditEntry::create(&account));
        Ok(Receipt {
            account,
            amount: initial_deposit,
            warnings,
        })
    }

    /// Look up an account by number
    pub fn find(&self, number: AccountNumber) -> BankResult<&Account> {
        self.storage.accounts.get(number)
    }

    /// Balance enquiry; never mutates or persists
    pub fn balance(&self, number: AccountNumber) -> BankResult<Account> {
        self.find(number).cloned()
    }

    /// Add a positive amount to an account
    pub fn deposit(&mut self, number: AccountNumber, amount: Money) -> BankResult<Receipt> {
        let index = self.locate(number)?;
        let before = self.balance_at(index);
        let account = self.storage.accounts.credit(index, amount)?.clone();

        let warnings = self.commit(&AuditEntry::deposit(&account, amount, before));
        Ok(Receipt {
            account,
            amount,
            warnings,
        })
    }

    /// Take a positive amount, no larger than the balance, out of an account
    pub fn withdraw(&mut self, number: AccountNumber, amount: Money) -> BankResult<Receipt> {
        let index = self.locate(number)?;
        let before = self.balance_at(index);
        let account = self.storage.accounts.debit(index, amount)?.clone();

        let warnings = self.commit(&AuditEntry::withdrawal(&account, amount, before));
        Ok(Receipt {
            account,
            amount,
            warnings,
        })
    }

    fn locate(&self, number: AccountNumber) -> BankResult<usize> {
        self.storage
            .accounts
            .find(number)
            .ok_or(BankError::AccountNotFound(number))
    }

    fn balance_at(&self, index: usize) -> Money {
        self.storage
            .accounts
            .at(index)
            .map(Account::balance)
            .unwrap_or_default()
    }

    /// Persist the store, then audit; failures don't roll back memory
    fn commit(&self, entry: &AuditEntry) -> Vec<BankError> {
        let mut warnings = Vec::new();

        if let Err(e) = self.storage.save() {
            warnings.push(e);
        }
        if let Err(e) = self.storage.audit(entry) {
            warnings.push(e);
        }

        warnings
    }
}
