//! Interactive command menu
//!
//! Renders the numbered menu, reads a choice, dispatches to the account
//! service, and waits for Enter after every round, including the farewell.
//! The loop ends on choice 5 or when input runs out.

mod console;

pub use console::Console;

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_account_details, format_created, format_deposit, format_withdrawal};
use crate::error::{BankError, BankResult};
use crate::models::AccountNumber;
use crate::services::{AccountService, Receipt};
use crate::storage::Storage;

const MENU_TEXT: &str = "\n\
========================================\n     \
BANKING MANAGEMENT SYSTEM\n\
========================================\n\
1. Create New Account\n\
2. Deposit Money\n\
3. Withdraw Money\n\
4. Check Balance\n\
5. Exit\n\
========================================";

/// Menu lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Deposit,
    Withdraw,
    Balance,
    Exit,
}

impl MenuChoice {
    /// Map a menu number to its choice
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::Create),
            2 => Some(Self::Deposit),
            3 => Some(Self::Withdraw),
            4 => Some(Self::Balance),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Parse a raw input token
    pub fn parse(token: &str) -> Option<Self> {
        token.parse().ok().and_then(Self::from_number)
    }
}

/// The menu loop over a storage coordinator and a console
pub struct Menu<'s, R, W> {
    storage: &'s mut Storage,
    console: Console<R, W>,
    symbol: String,
    clear_screen: bool,
    state: MenuState,
}

impl<'s, R: BufRead, W: Write> Menu<'s, R, W> {
    pub fn new(storage: &'s mut Storage, settings: &Settings, input: R, output: W) -> Self {
        Self {
            storage,
            console: Console::new(input, output),
            symbol: settings.currency_symbol.clone(),
            clear_screen: settings.clear_screen,
            state: MenuState::Running,
        }
    }

    /// Override the screen clearing setting, e.g. when output is not a terminal
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Run rounds until the menu terminates
    pub fn run(&mut self) -> BankResult<()> {
        while self.state == MenuState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Run a single round: render, read, dispatch, acknowledge
    pub fn step(&mut self) -> BankResult<MenuState> {
        if self.clear_screen {
            self.console.clear_screen()?;
        }
        self.console.println(MENU_TEXT)?;

        let token = match self.console.prompt("Enter your choice: ") {
            Ok(token) => token,
            Err(BankError::EndOfInput) => return self.terminate(),
            Err(e) => return Err(e),
        };

        match MenuChoice::parse(&token) {
            Some(MenuChoice::Exit) => {
                self.console
                    .println("\nThank you for using our banking system!")?;
                self.console.println("All data has been saved successfully.")?;
                self.state = MenuState::Terminated;
            }
            Some(choice) => match self.dispatch(choice) {
                Ok(()) => {}
                Err(BankError::EndOfInput) => return self.terminate(),
                Err(e) => self.report(&e)?,
            },
            None => self.console.println("\nInvalid choice! Please try again.")?,
        }

        match self.console.wait_for_enter("\nPress Enter to continue...") {
            Ok(()) => Ok(self.state),
            Err(BankError::EndOfInput) => self.terminate(),
            Err(e) => Err(e),
        }
    }

    /// Give back the writer, e.g. to inspect a test transcript
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> BankResult<()> {
        match choice {
            MenuChoice::Create => self.create_account(),
            MenuChoice::Deposit => self.deposit_money(),
            MenuChoice::Withdraw => self.withdraw_money(),
            MenuChoice::Balance => self.check_balance(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn create_account(&mut self) -> BankResult<()> {
        let mut service = AccountService::new(&mut *self.storage);
        service.ensure_capacity()?;

        self.console.println("\n--- Create New Account ---")?;
        let name = self.console.prompt("Enter Account Holder Name: ")?;
        let number: AccountNumber = self
            .console
            .prompt_parse("Enter Account Number: ", "an account number")?;
        service.ensure_number_available(number)?;

        let label = format!("Enter Initial Deposit: {}", self.symbol);
        let amount = self.console.prompt_money(&label)?;

        let receipt = service.create(&name, number, amount)?;
        self.print_receipt(&receipt, format_created(&receipt, &self.symbol))
    }

    fn deposit_money(&mut self) -> BankResult<()> {
        let mut service = AccountService::new(&mut *self.storage);

        self.console.println("\n--- Deposit Money ---")?;
        let number: AccountNumber = self
            .console
            .prompt_parse("Enter Account Number: ", "an account number")?;
        service.find(number)?;

        let label = format!("Enter Amount to Deposit: {}", self.symbol);
        let amount = self.console.prompt_money(&label)?;

        let receipt = service.deposit(number, amount)?;
        self.print_receipt(&receipt, format_deposit(&receipt, &self.symbol))
    }

    fn withdraw_money(&mut self) -> BankResult<()> {
        let mut service = AccountService::new(&mut *self.storage);

        self.console.println("\n--- Withdraw Money ---")?;
        let number: AccountNumber = self
            .console
            .prompt_parse("Enter Account Number: ", "an account number")?;
        let balance = service.find(number)?.balance();

        self.console.println(&format!(
            "Current Balance: {}",
            balance.format_with_symbol(&self.symbol)
        ))?;
        let label = format!("Enter Amount to Withdraw: {}", self.symbol);
        let amount = self.console.prompt_money(&label)?;

        let receipt = service.withdraw(number, amount)?;
        self.print_receipt(&receipt, format_withdrawal(&receipt, &self.symbol))
    }

    fn check_balance(&mut self) -> BankResult<()> {
        let service = AccountService::new(&mut *self.storage);

        self.console.println("\n--- Check Balance ---")?;
        let number: AccountNumber = self
            .console
            .prompt_parse("Enter Account Number: ", "an account number")?;
        let account = service.balance(number)?;

        self.console
            .print(&format_account_details(&account, &self.symbol))
    }

    fn print_receipt(&mut self, receipt: &Receipt, text: String) -> BankResult<()> {
        for warning in &receipt.warnings {
            self.console.println(&format!("\nError: {}", warning))?;
        }
        self.console.print(&text)
    }

    fn report(&mut self, error: &BankError) -> BankResult<()> {
        self.console.println(&format!("\nError: {}", error))?;
        if let BankError::InsufficientBalance { available, .. } = error {
            self.console.println(&format!(
                "Available Balance: {}",
                available.format_with_symbol(&self.symbol)
            ))?;
        }
        Ok(())
    }

    fn terminate(&mut self) -> BankResult<MenuState> {
        self.console.println("")?;
        self.state = MenuState::Terminated;
        Ok(self.state)
    }
}
