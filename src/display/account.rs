//! Account display formatting
//!
//! Formats accounts and operation receipts for terminal output.

use crate::models::Account;
use crate::services::account::Receipt;

/// Confirmation printed after an account is opened
pub fn format_created(receipt: &Receipt, symbol: &str) -> String {
    let account = &receipt.account;
    let mut output = String::from("\n✓ Account created successfully!\n");
    output.push_str(&format!("Account Number: {}\n", account.number()));
    output.push_str(&format!("Account Holder: {}\n", account.name()));
    output.push_str(&format!(
        "Balance: {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output
}

/// Confirmation printed after a deposit
pub fn format_deposit(receipt: &Receipt, symbol: &str) -> String {
    let account = &receipt.account;
    let mut output = String::from("\n✓ Deposit successful!\n");
    output.push_str(&format!("Account Number: {}\n", account.number()));
    output.push_str(&format!(
        "Deposited: {}\n",
        receipt.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "New Balance: {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output
}

/// Confirmation printed after a withdrawal
pub fn format_withdrawal(receipt: &Receipt, symbol: &str) -> String {
    let account = &receipt.account;
    let mut output = String::from("\n✓ Withdrawal successful!\n");
    output.push_str(&format!("Account Number: {}\n", account.number()));
    output.push_str(&format!(
        "Withdrawn: {}\n",
        receipt.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining Balance: {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, symbol: &str) -> String {
    let mut output = String::from("\n--- Account Details ---\n");
    output.push_str(&format!("Account Number: {}\n", account.number()));
    output.push_str(&format!("Account Holder: {}\n", account.name()));
    output.push_str(&format!(
        "Current Balance: {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output
}

/// Format a list of accounts as a table with a total row
pub fn format_account_list<'a, I>(accounts: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Account>,
{
    let accounts: Vec<&Account> = accounts.into_iter().collect();
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name().chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>10}  {:<name_width$}  {:>14}\n",
        "Number",
        "Holder",
        "Balance",
        name_width = name_width,
    ));
    let separator = format!(
        "{:->10}  {:-<name_width$}  {:->14}\n",
        "",
        "",
        "",
        name_width = name_width,
    );
    output.push_str(&separator);

    for account in &accounts {
        output.push_str(&format!(
            "{:>10}  {:<name_width$}  {:>14}\n",
            account.number().to_string(),
            account.name(),
            account.balance().format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    let total: crate::models::Money = accounts.iter().map(|a| a.balance()).sum();
    output.push_str(&separator);
    output.push_str(&format!(
        "{:>10}  {:<name_width$}  {:>14}\n",
        "TOTAL",
        format!("{} account(s)", accounts.len()),
        total.format_with_symbol(symbol),
        name_width = name_width,
    ));

    output
}
