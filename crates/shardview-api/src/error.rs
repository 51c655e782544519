//! Failure taxonomy for balance lookups.

use thiserror::Error;

/// Classified outcome of a failed balance lookup.
///
/// The enum is `non_exhaustive`: implementations may grow new kinds, and
/// downstream matches must carry a catch-all arm. The plugin maps any kind
/// it does not recognise to the same advisory as [`Backend`](Self::Backend),
/// so an unclassified failure can never escape unhandled.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum BalanceError {
    /// The economy feature is administratively disabled.
    #[error("the economy is disabled")]
    EconomyDisabled,

    /// The player's account is temporarily locked for transactions.
    #[error("account is locked for transactions")]
    AccountLocked,

    /// Any infrastructure failure: timeout, connection error, malformed
    /// response, unexpected fault. The reason is for operators only and is
    /// never shown to the player.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl BalanceError {
    /// Convenience constructor for [`Backend`](Self::Backend) failures.
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend(reason.into())
    }
}
