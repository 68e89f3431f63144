mod bootstrap_settings;
mod database;
mod env_provider;
pub mod errors;
mod logging;

pub use bootstrap_settings::BootstrapSettings;
pub use database::{init_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::{init_logging, init_logging_with, LoggingConfig, LoggingError};
