//! nestegg-core
//!
//! Business logic and services for nestegg: goal form validation, the list
//! query pipeline, currency formatting, the in-memory store, and
//! configuration. Depends on nestegg-domain. No CLI, no terminal I/O.

pub mod budget_service;
pub mod config;
pub mod error;
pub mod format;
pub mod goal_service;
pub mod query;
pub mod store;
pub mod validate;

pub use budget_service::*;
pub use config::{Config, ConfigManager};
pub use error::CoreError;
pub use format::*;
pub use goal_service::*;
pub use query::*;
pub use store::Store;
pub use validate::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env()
            .add_directive("nestegg=info".parse().expect("static directive parses"))
            .add_directive("nestegg_core=info".parse().expect("static directive parses"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("nestegg tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
