//! Boundary contracts between the Shardview plugin and its host.
//!
//! The plugin itself (the `shardview` crate) owns no I/O and no state beyond
//! a task scope; everything it talks to is defined here as a trait:
//!
//! - [`BlockBreakEvent`] and [`BlockBreakHandler`] — the inbound event
//!   surface, dispatched by the host on its single event thread.
//! - [`ServiceRegistry`] — the host's type-keyed service map, through which
//!   the plugin discovers its collaborators at enable time.
//! - [`BalanceService`] — the external economy ledger, queried
//!   asynchronously for a player's shard balance.
//! - [`Messenger`] — the notification renderer that delivers styled chat
//!   messages and operational log lines.
//!
//! Hosts implement these traits; the plugin only consumes them. Everything
//! here is object-safe so collaborators can be swapped for stubs in tests.

pub mod balance;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod notify;
pub mod registry;

pub use balance::{BalanceService, Shards};
pub use dispatch::{BlockBreakHandler, EventDispatcher};
pub use error::BalanceError;
pub use event::{BlockBreakEvent, BlockPos, PlayerRef};
pub use notify::Messenger;
pub use registry::ServiceRegistry;
