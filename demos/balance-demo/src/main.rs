//! Balance demo
//!
//! Wires the Shardview plugin against an in-memory economy ledger and a
//! tracing-backed messenger, then plays through all four outcomes: a
//! successful lookup, a locked account, a missing ledger row, and the
//! economy kill-switch.
//!
//! ```bash
//! cargo run --package balance-demo
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use shardview::{BalancePlugin, HostContext, logging};
use shardview_api::{
    BalanceError, BalanceService, BlockBreakEvent, BlockPos, EventDispatcher, Messenger,
    PlayerRef, ServiceRegistry, Shards,
};

/// Fixed conversion ratio owned by this demo economy.
const SHARDS_PER_DIAMOND: f64 = 9.0;

/// In-memory stand-in for the real economy service.
struct DemoLedger {
    balances: HashMap<Uuid, u64>,
    locked: HashSet<Uuid>,
    economy_enabled: AtomicBool,
}

impl DemoLedger {
    /// Flips the administrative kill-switch.
    fn set_economy_enabled(&self, enabled: bool) {
        self.economy_enabled.store(enabled, Ordering::SeqCst);
    }
}

#[async_trait]
impl BalanceService for DemoLedger {
    async fn total_shards(&self, player: Uuid) -> Result<Shards, BalanceError> {
        // Simulated ledger latency.
        tokio::time::sleep(Duration::from_millis(50)).await;

        if !self.economy_enabled.load(Ordering::SeqCst) {
            return Err(BalanceError::EconomyDisabled);
        }
        if self.locked.contains(&player) {
            return Err(BalanceError::AccountLocked);
        }
        self.balances
            .get(&player)
            .copied()
            .map(Shards)
            .ok_or_else(|| BalanceError::backend(format!("no ledger row for {player}")))
    }

    fn shards_to_diamonds(&self, shards: Shards) -> f64 {
        shards.0 as f64 / SHARDS_PER_DIAMOND
    }
}

/// Renders chat messages and log lines through tracing.
struct ChatMessenger;

impl Messenger for ChatMessenger {
    fn send(&self, player: &PlayerRef, message: &str) {
        info!(target: "chat", "-> {}: {message}", player.name);
    }

    fn log(&self, tag: &str, line: &str) {
        info!("{tag} {line}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init("balance_demo=info,chat=info,shardview=debug");

    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let eve = Uuid::new_v4();

    let ledger = Arc::new(DemoLedger {
        balances: HashMap::from([(alice, 1305), (bob, 27)]),
        locked: HashSet::from([bob]),
        economy_enabled: AtomicBool::new(true),
    });

    let registry = Arc::new(ServiceRegistry::new());
    registry.register::<dyn BalanceService>(Arc::clone(&ledger) as Arc<dyn BalanceService>);
    registry.register::<dyn Messenger>(Arc::new(ChatMessenger));

    let dispatcher = Arc::new(EventDispatcher::new());
    let host = HostContext::new(
        registry,
        Arc::clone(&dispatcher),
        tokio::runtime::Handle::current(),
    );
    let plugin = BalancePlugin::with_default_config()?.enable(&host)?;

    // Three players break blocks: a normal balance, a locked account, and a
    // player the ledger has never heard of.
    dispatcher.dispatch(&BlockBreakEvent::new(alice, "Alice", BlockPos::new(12, 64, -7)));
    dispatcher.dispatch(&BlockBreakEvent::new(bob, "Bob", BlockPos::new(12, 64, -8)));
    dispatcher.dispatch(&BlockBreakEvent::new(eve, "Eve", BlockPos::new(13, 64, -7)));

    tokio::time::sleep(Duration::from_millis(300)).await;

    // Fourth outcome: an operator pulls the economy kill-switch.
    ledger.set_economy_enabled(false);
    dispatcher.dispatch(&BlockBreakEvent::new(alice, "Alice", BlockPos::new(14, 64, -7)));

    // Let the lookups land before tearing down.
    tokio::time::sleep(Duration::from_millis(150)).await;
    plugin.disable().await;

    info!("Demo complete");
    Ok(())
}
