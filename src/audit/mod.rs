//! Audit logging system for bank-cli
//!
//! Records every successful create, deposit and withdrawal with the balance
//! before and after, in an append-only JSON-lines file.
//!
//! # Example
//!
//! ```rust,ignore
//! use bank::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&account))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
