//! Flat-file record format with atomic writes
//!
//! The data file holds the account count on its first line followed by one
//! `<name> <number> <balance>` record per line, balance to two decimals.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountNumber, Money};

use super::accounts::AccountStore;

/// Render the store in the on-disk record format
pub fn format_records(store: &AccountStore) -> String {
    let mut output = format!("{}\n", store.len());
    for account in store.iter() {
        output.push_str(&format!(
            "{} {} {}\n",
            account.name(),
            account.number(),
            account.balance().to_plain_string()
        ));
    }
    output
}

/// Parse the on-disk record format into a store of the given capacity
pub fn parse_records(contents: &str, capacity: usize) -> BankResult<AccountStore> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((count_line, count_text)) = lines.next() else {
        return Err(BankError::corrupt(1, "missing account count"));
    };

    let count: usize = count_text.parse().map_err(|_| {
        BankError::corrupt(count_line, format!("invalid account count '{}'", count_text))
    })?;

    if count > capacity {
        return Err(BankError::corrupt(
            count_line,
            format!("account count {} exceeds the limit of {}", count, capacity),
        ));
    }

    let mut store = AccountStore::with_capacity(capacity);
    let mut last_line = count_line;

    for _ in 0..count {
        let Some((line_no, line)) = lines.next() else {
            return Err(BankError::corrupt(
                last_line + 1,
                format!("expected {} records, found {}", count, store.len()),
            ));
        };
        last_line = line_no;

        let account = parse_record(line_no, line)?;
        store.insert(account).map_err(|e| match e {
            BankError::DuplicateAccountNumber(number) => {
                BankError::corrupt(line_no, format!("duplicate account number {}", number))
            }
            other => BankError::corrupt(line_no, other.to_string()),
        })?;
    }

    Ok(store)
}

fn parse_record(line_no: usize, line: &str) -> BankResult<Account> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [name, number, balance] = fields[..] else {
        return Err(BankError::corrupt(
            line_no,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    };

    let number: AccountNumber = number.parse().map_err(|_| {
        BankError::corrupt(line_no, format!("invalid account number '{}'", number))
    })?;

    let balance = Money::parse(balance)
        .map_err(|e| BankError::corrupt(line_no, e.to_string()))?;

    Account::new(name, number, balance).map_err(|e| BankError::corrupt(line_no, e.to_string()))
}

/// Read a text file, returning `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> BankResult<Option<String>> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(BankError::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write text to a file atomically (write to temp, then rename)
///
/// Every failure maps to [`BankError::PersistenceUnavailable`].
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> BankResult<()> {
    let path = path.as_ref();
    let unavailable = |what: &str, e: std::io::Error| {
        BankError::PersistenceUnavailable(format!("{} {}: {}", what, path.display(), e))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| unavailable("cannot create directory for", e))?;
    }

    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path).map_err(|e| unavailable("cannot open", e))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            unavailable("cannot write", e)
        })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        unavailable("cannot replace", e)
    })?;

    Ok(())
}
