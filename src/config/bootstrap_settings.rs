use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::errors::ApplicationError;

const DEFAULT_DATABASE_URL: &str = "sqlite://bikes.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Bootstrap settings for infrastructure configuration
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment
    ///
    /// Unset variables fall back to their defaults; set-but-invalid values are errors.
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url = env_provider
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.is_empty() {
            return Err(ApplicationError::invalid_setting(
                "DATABASE_URL",
                "must be at least 1 characters long",
            ));
        }

        let server_host = env_provider
            .get_var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        Self::validate_host_address(&server_host)?;

        let server_port = match env_provider.get_var("PORT") {
            Some(value) => Self::parse_port(&value)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    fn validate_host_address(host: &str) -> Result<(), ApplicationError> {
        if host.is_empty() {
            return Err(ApplicationError::invalid_setting("HOST", "cannot be empty"));
        }
        host.parse::<IpAddr>().map(|_| ()).map_err(|_| {
            ApplicationError::invalid_setting("HOST", format!("'{}' is not a valid IP address", host))
        })
    }

    fn parse_port(value: &str) -> Result<u16, ApplicationError> {
        let port: u32 = value.trim().parse().map_err(|_| {
            ApplicationError::invalid_setting(
                "PORT",
                format!("Expected port number between 1 and 65535, got '{}'", value),
            )
        })?;

        match u16::try_from(port) {
            Ok(port) if port >= 1 => Ok(port),
            _ => Err(ApplicationError::invalid_setting(
                "PORT",
                format!("{} is outside valid range 1-65535", port),
            )),
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
