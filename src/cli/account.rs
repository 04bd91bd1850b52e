//! Account CLI commands
//!
//! Non-interactive views of the account store.

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::BankResult;
use crate::models::AccountNumber;
use crate::storage::Storage;

/// Print every account as a table
pub fn handle_list(storage: &Storage, settings: &Settings) -> BankResult<()> {
    print!(
        "{}",
        format_account_list(storage.accounts.iter(), &settings.currency_symbol)
    );
    Ok(())
}

/// Print one account's details
pub fn handle_show(storage: &Storage, settings: &Settings, number: AccountNumber) -> BankResult<()> {
    let account = storage.accounts.get(number)?;
    print!(
        "{}",
        format_account_details(account, &settings.currency_symbol)
    );
    Ok(())
}
