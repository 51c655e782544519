//! The inbound event surface.
//!
//! The host dispatches exactly one event type to this plugin:
//! [`BlockBreakEvent`]. Event objects are only valid for the duration of the
//! dispatch call, so handlers that continue asynchronously must snapshot
//! what they need into a [`PlayerRef`] first — see
//! [`BlockBreakEvent::player`].

use uuid::Uuid;

/// Position of a block in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// An immutable snapshot of the player who triggered an event.
///
/// Captured synchronously on the dispatch thread. Asynchronous work holds
/// the snapshot, never the live event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    /// Globally unique player id.
    pub id: Uuid,
    /// Display name at the time the event fired.
    pub name: String,
}

impl PlayerRef {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Fired by the host when a player breaks a block.
///
/// Handlers receive a shared reference that is not guaranteed valid once
/// dispatch returns; anything needed later goes through [`Self::player`].
#[derive(Debug, Clone)]
pub struct BlockBreakEvent {
    pub player_id: Uuid,
    pub player_name: String,
    pub position: BlockPos,
}

impl BlockBreakEvent {
    pub fn new(player_id: Uuid, player_name: impl Into<String>, position: BlockPos) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            position,
        }
    }

    /// Snapshots the triggering player for use beyond the dispatch call.
    pub fn player(&self) -> PlayerRef {
        PlayerRef::new(self.player_id, self.player_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_independent_of_the_event() {
        let id = Uuid::new_v4();
        let event = BlockBreakEvent::new(id, "Alice", BlockPos::new(1, 64, -3));
        let player = event.player();
        drop(event);

        assert_eq!(player.id, id);
        assert_eq!(player.name, "Alice");
    }

    #[test]
    fn block_pos_displays_coordinates() {
        assert_eq!(BlockPos::new(1, 2, 3).to_string(), "(1, 2, 3)");
    }
}
