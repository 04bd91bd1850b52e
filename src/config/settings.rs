//! User settings for bank-cli
//!
//! Manages user preferences: the account limit, display currency, screen
//! clearing between menu rounds, and audit logging.

use serde::{Deserialize, Serialize};

use super::paths::BankPaths;
use crate::error::BankError;
use crate::storage::MAX_ACCOUNTS;

/// User settings for bank-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of accounts the store will hold
    #[serde(default = "default_max_accounts")]
    pub max_accounts: usize,

    /// Currency symbol used on screen
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether the menu clears the terminal before each round
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Whether successful operations are appended to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_accounts() -> usize {
    MAX_ACCOUNTS
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_accounts: default_max_accounts(),
            currency_symbol: default_currency(),
            clear_screen: true,
            audit_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_create(paths: &BankPaths) -> Result<Self, BankError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BankError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BankError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.max_accounts == 0 {
                return Err(BankError::Config("max_accounts must be at least 1".into()));
            }

            Ok(settings)
        } else {
            // First run: write the defaults so they can be edited
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BankPaths) -> Result<(), BankError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BankError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BankError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
