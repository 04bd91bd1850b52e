//! Storage layer for bank-cli
//!
//! Owns the in-memory [`AccountStore`], reads it from the flat data file at
//! startup, rewrites the whole file after each mutation, and forwards audit
//! entries to the [`AuditLogger`].

pub mod accounts;
pub mod file_io;

pub use accounts::{AccountStore, MAX_ACCOUNTS};
pub use file_io::{format_records, parse_records, read_text, write_text_atomic};

use std::path::{Path, PathBuf};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::BankPaths;
use crate::config::settings::Settings;
use crate::error::BankResult;

/// What [`Storage::load`] found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No data file yet; the store starts empty
    Fresh,
    /// This many accounts were read from the data file
    Loaded(usize),
}

/// Main storage coordinator
pub struct Storage {
    data_file: PathBuf,
    pub accounts: AccountStore,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create storage for the resolved paths and settings
    pub fn new(paths: &BankPaths, settings: &Settings) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            data_file: paths.data_file(),
            accounts: AccountStore::with_capacity(settings.max_accounts),
            audit,
        }
    }

    /// Create storage over an explicit data file with no audit log
    pub fn with_data_file(data_file: PathBuf, capacity: usize) -> Self {
        Self {
            data_file,
            accounts: AccountStore::with_capacity(capacity),
            audit: None,
        }
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Load accounts from disk, replacing whatever is in memory
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(&mut self) -> BankResult<LoadOutcome> {
        let Some(contents) = read_text(&self.data_file)? else {
            self.accounts.clear();
            return Ok(LoadOutcome::Fresh);
        };

        self.accounts = parse_records(&contents, self.accounts.capacity())?;
        Ok(LoadOutcome::Loaded(self.accounts.len()))
    }

    /// Rewrite the data file from the in-memory store
    pub fn save(&self) -> BankResult<()> {
        write_text_atomic(&self.data_file, &format_records(&self.accounts))
    }

    /// Append an audit entry if auditing is enabled
    pub fn audit(&self, entry: &AuditEntry) -> BankResult<()> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }
}
