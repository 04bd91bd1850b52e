//! bank-cli - Console banking system backed by a flat data file
//!
//! This library provides the core of the `bank` application: a small,
//! insertion-ordered table of bank accounts that is rewritten to a plain text
//! file after every change and reloaded at startup.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Accounts, account numbers and money
//! - `storage`: The in-memory account store and the data file format
//! - `services`: Create, deposit, withdraw and balance operations
//! - `audit`: Append-only audit log of successful operations
//! - `display`: Terminal formatting
//! - `menu`: The interactive numbered menu
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use bank::config::{paths::BankPaths, settings::Settings};
//! use bank::storage::Storage;
//!
//! let paths = BankPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(&paths, &settings);
//! storage.load()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BankError, BankResult};
