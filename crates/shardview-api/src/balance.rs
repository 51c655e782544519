//! The external economy service boundary.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::BalanceError;

/// A raw shard balance. Non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shards(pub u64);

impl std::fmt::Display for Shards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Shards {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// The economy ledger queried for player balances.
///
/// Implemented by the host's economy plugin and consumed through the
/// [`ServiceRegistry`](crate::ServiceRegistry). Lookups may be slow; callers
/// must not await them on the host's event thread.
#[async_trait]
pub trait BalanceService: Send + Sync {
    /// Returns the player's total shard balance.
    ///
    /// May suspend indefinitely unless the implementation enforces its own
    /// timeout; a timeout surfaces as [`BalanceError::Backend`].
    async fn total_shards(&self, player: Uuid) -> Result<Shards, BalanceError>;

    /// Converts a raw shard amount into display-currency diamonds.
    ///
    /// The conversion ratio is owned by the economy contract, not by
    /// callers.
    fn shards_to_diamonds(&self, shards: Shards) -> f64;
}
