//! Shardview — a template plugin for event-driven hosts.
//!
//! Demonstrates the canonical shape of a plugin that reacts to a host event
//! with a slow external lookup: when a player breaks a block, Shardview
//! queries the economy service for the player's shard balance and whispers
//! the result back, without ever blocking the host's event thread.
//!
//! # Wiring
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shardview::{BalancePlugin, HostContext};
//! use shardview::api::{BalanceService, EventDispatcher, Messenger, ServiceRegistry};
//!
//! let registry = Arc::new(ServiceRegistry::new());
//! registry.register::<dyn BalanceService>(bank);
//! registry.register::<dyn Messenger>(messenger);
//!
//! let host = HostContext::new(
//!     registry,
//!     Arc::new(EventDispatcher::new()),
//!     tokio::runtime::Handle::current(),
//! );
//! let plugin = BalancePlugin::with_default_config()?.enable(&host)?;
//!
//! // ... host dispatches block-break events ...
//!
//! plugin.disable().await; // drains in-flight lookups
//! ```
//!
//! # Structure
//!
//! - [`scope`] — the process-wide task scope all asynchronous work attaches
//!   to, cancelled and drained as a unit on disable.
//! - [`listener`] — the block-break handler: snapshot, spawn, await, reply.
//! - [`plugin`] — lifecycle and the explicit host context.
//! - [`config`] — message templates and the log tag, figment-loaded.
//! - [`logging`] — tracing bootstrap for binaries that embed the plugin.

pub mod config;
pub mod error;
pub mod listener;
pub mod logging;
pub mod plugin;
pub mod scope;

pub use shardview_api as api;

pub use config::{ConfigLoader, Messages, PluginConfig};
pub use error::{ConfigError, PluginError};
pub use listener::BalanceListener;
pub use plugin::{BalancePlugin, EnabledPlugin, HostContext};
pub use scope::TaskScope;
