//! Plugin lifecycle.
//!
//! The host hands the plugin an explicit [`HostContext`] instead of the
//! plugin reaching into globals: the service registry to discover its
//! collaborators, and the dispatcher to register its listener with. Enable
//! and disable bracket the lifetime of the task scope.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{error, info};

use shardview_api::{BalanceService, EventDispatcher, Messenger, ServiceRegistry};

use crate::config::{ConfigLoader, PluginConfig};
use crate::error::PluginError;
use crate::listener::BalanceListener;
use crate::scope::TaskScope;

/// Everything the host exposes to a plugin at enable time.
///
/// `runtime` is the handle asynchronous work is scheduled onto; the host's
/// event thread itself is not a runtime worker, so plugins must never rely
/// on an ambient runtime context.
#[derive(Debug, Clone)]
pub struct HostContext {
    pub services: Arc<ServiceRegistry>,
    pub dispatcher: Arc<EventDispatcher>,
    pub runtime: Handle,
}

impl HostContext {
    pub fn new(
        services: Arc<ServiceRegistry>,
        dispatcher: Arc<EventDispatcher>,
        runtime: Handle,
    ) -> Self {
        Self {
            services,
            dispatcher,
            runtime,
        }
    }
}

/// The Shardview plugin, ready to be enabled.
pub struct BalancePlugin {
    config: PluginConfig,
}

impl BalancePlugin {
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    /// Creates the plugin with configuration from `shardview.toml` and the
    /// environment.
    pub fn with_default_config() -> Result<Self, PluginError> {
        let config = ConfigLoader::new()
            .file("shardview.toml")
            .with_env()
            .load()?;
        Ok(Self::new(config))
    }

    /// Wires the plugin into the host.
    ///
    /// Looks up the balance service and the messenger in the host's
    /// registry, creates the task scope, and registers the listener. If a
    /// required service is missing the plugin refuses to enable and the
    /// host should leave it disabled.
    pub fn enable(self, host: &HostContext) -> Result<EnabledPlugin, PluginError> {
        let bank = host
            .services
            .get::<dyn BalanceService>()
            .ok_or_else(|| {
                error!("Balance service is not registered; Shardview stays disabled");
                PluginError::MissingBalanceService
            })?;
        let messenger = host.services.get::<dyn Messenger>().ok_or_else(|| {
            error!("Messenger is not registered; Shardview stays disabled");
            PluginError::MissingMessenger
        })?;

        let scope = Arc::new(TaskScope::new(host.runtime.clone()));
        let listener = BalanceListener::new(
            Arc::clone(&scope),
            bank,
            messenger,
            Arc::new(self.config),
        );
        host.dispatcher.register(Arc::new(listener));

        info!("Shardview enabled");
        Ok(EnabledPlugin { scope })
    }
}

/// Handle to a running plugin instance.
///
/// Dropping the handle without calling [`disable`](Self::disable) leaves
/// in-flight lookups running; hosts should disable explicitly during
/// teardown.
pub struct EnabledPlugin {
    scope: Arc<TaskScope>,
}

impl EnabledPlugin {
    /// Stops the plugin: cancels in-flight lookups and waits until every
    /// spawned task has finished or been cancelled.
    ///
    /// Events dispatched after this point are ignored.
    pub async fn disable(self) {
        self.scope.shutdown().await;
        info!("Shardview disabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn enable_fails_without_a_balance_service() {
        let host = HostContext::new(
            Arc::new(ServiceRegistry::new()),
            Arc::new(EventDispatcher::new()),
            Handle::current(),
        );

        let result = BalancePlugin::new(PluginConfig::default()).enable(&host);
        assert!(matches!(result, Err(PluginError::MissingBalanceService)));
        assert_eq!(host.dispatcher.handler_count(), 0);
    }
}
