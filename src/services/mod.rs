//! Service layer for bank-cli
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence, and audit logging.

pub mod account;

pub use account::{AccountService, Receipt};
