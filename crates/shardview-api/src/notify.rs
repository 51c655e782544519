//! The notification renderer boundary.

use crate::event::PlayerRef;

/// Delivers styled chat messages to players and structured lines to the
/// operational log.
///
/// Both methods are fire-and-forget: implementations are expected to be
/// non-blocking or to hand off to their own delivery machinery.
pub trait Messenger: Send + Sync {
    /// Sends one styled message to a player.
    fn send(&self, player: &PlayerRef, message: &str);

    /// Writes one tagged line to the operational log.
    fn log(&self, tag: &str, line: &str);
}
