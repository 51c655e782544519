//! Plugin error types.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),
}

/// Errors raised by the plugin lifecycle.
///
/// A missing collaborator mirrors the host pattern of a plugin refusing to
/// enable when a required service provider is absent.
#[derive(Debug, Error)]
pub enum PluginError {
    /// No `dyn BalanceService` registered with the host.
    #[error("no balance service is registered with the host")]
    MissingBalanceService,

    /// No `dyn Messenger` registered with the host.
    #[error("no messenger is registered with the host")]
    MissingMessenger,

    /// Configuration failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
