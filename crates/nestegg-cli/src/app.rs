//! Shared application context threaded through every screen.

use thiserror::Error;

use nestegg_core::{format_amount, Config, ConfigManager, CoreError, Locale, Store};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{0}")]
    Usage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// The store plus the preferences every renderer needs.
pub struct App {
    pub store: Store,
    pub config: Config,
    pub locale: Locale,
}

impl App {
    /// A missing or unreadable config falls back to defaults; the app
    /// must still come up on a fresh machine.
    pub fn load() -> Self {
        let config = ConfigManager::new()
            .and_then(|manager| manager.load())
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "using default configuration");
                Config::default()
            });
        let locale = config.locale();
        Self {
            store: Store::seeded(),
            config,
            locale,
        }
    }

    /// Amount with grouping separators and the configured currency code.
    pub fn money(&self, amount: i64) -> String {
        format!("{} {}", format_amount(amount, &self.locale), self.config.currency)
    }
}
