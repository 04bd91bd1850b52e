//! Audit CLI command
//!
//! Shows the tail of the audit log.

use crate::error::BankResult;
use crate::storage::Storage;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_audit(storage: &Storage, limit: usize) -> BankResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled in settings.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
