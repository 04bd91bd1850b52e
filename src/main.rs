use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::tty::IsTty;

use bank::cli::{handle_audit, handle_list, handle_show};
use bank::config::{paths::BankPaths, settings::Settings};
use bank::menu::Menu;
use bank::models::AccountNumber;
use bank::storage::{LoadOutcome, Storage};

#[derive(Parser)]
#[command(
    name = "bank",
    version,
    about = "Console banking system backed by a flat data file",
    long_about = "bank-cli keeps a small set of bank accounts in a plain text file. \
                  Run it without a command to open the interactive menu for creating \
                  accounts, depositing, withdrawing and checking balances."
)]
struct Cli {
    /// Base directory for settings, data and the audit log
    #[arg(long, global = true, env = "BANK_CLI_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// List all accounts with a total
    #[command(alias = "ls")]
    List,

    /// Show one account's details
    Show {
        /// Account number
        #[arg(allow_hyphen_values = true)]
        number: AccountNumber,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => BankPaths::with_base_dir(dir),
        None => BankPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let mut storage = Storage::new(&paths, &settings);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            match load(&mut storage)? {
                LoadOutcome::Fresh => println!("No previous data found. Starting fresh."),
                LoadOutcome::Loaded(count) => println!("Loaded {} account(s) from file.", count),
            }

            let stdin = io::stdin();
            let stdout = io::stdout();
            // Escape codes only make sense on a terminal
            let clear_screen = settings.clear_screen && stdout.is_tty();
            let mut menu = Menu::new(&mut storage, &settings, stdin.lock(), stdout.lock())
                .with_clear_screen(clear_screen);
            menu.run()?;
        }
        Commands::List => {
            load(&mut storage)?;
            handle_list(&storage, &settings)?;
        }
        Commands::Show { number } => {
            load(&mut storage)?;
            handle_show(&storage, &settings, number)?;
        }
        Commands::Audit { limit } => {
            handle_audit(&storage, limit)?;
        }
        Commands::Config => {
            println!("bank-cli Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Max accounts:    {}", settings.max_accounts);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Clear screen:    {}", settings.clear_screen);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}

fn load(storage: &mut Storage) -> Result<LoadOutcome> {
    let data_file = storage.data_file().display().to_string();
    storage
        .load()
        .with_context(|| format!("Failed to load account data from {}", data_file))
}
