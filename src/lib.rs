use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::error::{BackendError, ConfigurationError};
use crate::registry::Registry;

pub mod config;
pub mod data;
pub mod error;
pub mod ops;
pub mod registry;
pub mod resp;
pub mod role;
pub mod util;
pub mod validation;

/// Sets up logging and configuration, then builds the registry from the
/// configured seed data.
///
/// Pass `None` as `log_level` when a subscriber is already installed.
pub fn create(log_level: Option<Level>) -> Result<Registry, BackendError> {
    if let Some(l) = log_level {
        let subscriber = FmtSubscriber::builder().with_max_level(l).finish();

        if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Unable to set global logger: {}", err);
        };
    }

    tracing::info!("Reading .env file...");
    if dotenv::dotenv().is_err() {
        tracing::warn!("Unable to load .env file.");
    }

    tracing::info!("Loading configuration...");
    let c = match Config::load() {
        Ok(c) => {
            tracing::info!("Configuration loaded from {}.", c.file_path().display());
            c
        }
        Err(ConfigurationError::NotFound(_)) => {
            let c = Config::default();
            if c.save().is_err() {
                tracing::warn!("Unable to save generated configuration.");
            }
            c
        }
        Err(other) => {
            tracing::error!("Configuration error: {}", other);
            return Err(other.into());
        }
    };

    tracing::info!("Bootstrapping registry...");
    let registry = Registry::bootstrap(&c.seed).map_err(|e| {
        tracing::error!("Seed data is invalid: {}", e);
        BackendError::from(e)
    })?;

    Ok(registry)
}
