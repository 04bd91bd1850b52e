//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod audit;

pub use account::{handle_list, handle_show};
pub use audit::handle_audit;
