//! The event-triggered balance query.
//!
//! One handler, one behaviour: on every block break, snapshot the player,
//! spawn a task into the scope, await the economy lookup, and answer with
//! exactly one message — the rendered balance on success, or the fixed
//! advisory matching the failure kind. The dispatch thread returns before
//! the lookup resolves.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::debug;

use shardview_api::{
    BalanceError, BalanceService, BlockBreakEvent, BlockBreakHandler, Messenger,
};

use crate::config::PluginConfig;
use crate::scope::TaskScope;

/// Block-break handler that queries and reports the player's balance.
pub struct BalanceListener {
    scope: Arc<TaskScope>,
    bank: Arc<dyn BalanceService>,
    messenger: Arc<dyn Messenger>,
    config: Arc<PluginConfig>,
}

impl BalanceListener {
    pub fn new(
        scope: Arc<TaskScope>,
        bank: Arc<dyn BalanceService>,
        messenger: Arc<dyn Messenger>,
        config: Arc<PluginConfig>,
    ) -> Self {
        Self {
            scope,
            bank,
            messenger,
            config,
        }
    }
}

impl BlockBreakHandler for BalanceListener {
    fn on_block_break(&self, event: &BlockBreakEvent) {
        // The event is only valid during dispatch; capture what the task
        // needs up front.
        let player = event.player();
        let bank = Arc::clone(&self.bank);
        let messenger = Arc::clone(&self.messenger);
        let config = Arc::clone(&self.config);

        // The ledger lookup is potentially slow, so it never runs on the
        // dispatch thread.
        self.scope.spawn(async move {
            let result = AssertUnwindSafe(bank.total_shards(player.id))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| Err(BalanceError::backend("balance lookup panicked")));

            match result {
                Ok(shards) => {
                    let diamonds = pretty_diamonds(bank.shards_to_diamonds(shards));
                    messenger.send(&player, &config.messages.render_balance(shards, &diamonds));
                    messenger.log(
                        &config.log_tag,
                        &format!(
                            "Player {} balance is: {} shards ({} diamonds).",
                            player.name, shards, diamonds
                        ),
                    );
                }
                Err(BalanceError::EconomyDisabled) => {
                    messenger.send(&player, &config.messages.economy_disabled);
                }
                Err(BalanceError::AccountLocked) => {
                    messenger.send(&player, &config.messages.account_locked);
                }
                Err(BalanceError::Backend(reason)) => {
                    debug!(player = %player.name, %reason, "Balance lookup failed");
                    messenger.send(&player, &config.messages.backend_failure);
                }
                // Kinds added to the taxonomy later still get an answer.
                Err(error) => {
                    debug!(player = %player.name, %error, "Unclassified balance failure");
                    messenger.send(&player, &config.messages.backend_failure);
                }
            }
        });
    }
}

/// Formats a diamond amount for chat: whole numbers lose the fraction,
/// everything else keeps two decimals.
fn pretty_diamonds(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_diamond_amounts_drop_the_fraction() {
        assert_eq!(pretty_diamonds(100.0), "100");
        assert_eq!(pretty_diamonds(0.0), "0");
    }

    #[test]
    fn fractional_diamond_amounts_keep_two_decimals() {
        assert_eq!(pretty_diamonds(111.111), "111.11");
        assert_eq!(pretty_diamonds(0.5), "0.50");
    }
}
