//! World switching and respawn
//!
//! The world flip is deferred: a switch request arms a tick-counted latch
//! and the flip fires a fixed number of ticks later. Requests arriving while
//! a flip is pending are dropped, not queued — at most one flip is ever in
//! flight, and until it fires the old world stays active.

use serde::{Deserialize, Serialize};

use crate::consts::{RESPAWN_SHAKE, SWITCH_SHAKE, TRANSITION_TICKS};
use super::state::{GameState, Player, World};

/// Debounce latch for the world flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Transition {
    /// Accepting switch requests.
    #[default]
    Idle,
    /// A flip is scheduled; counts down once per tick. No cancellation.
    Pending { ticks_left: u32 },
}

impl Transition {
    /// Whether a flip is in flight.
    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, Transition::Pending { .. })
    }
}

impl GameState {
    /// Request a world switch. Dropped while a flip is already pending.
    pub fn request_switch(&mut self) {
        if self.transition.is_pending() {
            return;
        }
        self.transition = Transition::Pending {
            ticks_left: TRANSITION_TICKS,
        };
        self.shake = SWITCH_SHAKE;
    }

    /// Advance the transition countdown one tick. Returns the new world when
    /// the flip fires on this tick.
    pub(crate) fn step_transition(&mut self) -> Option<World> {
        match self.transition {
            Transition::Idle => None,
            Transition::Pending { ticks_left: 1 } => {
                self.transition = Transition::Idle;
                self.world = self.world.flipped();
                Some(self.world)
            }
            Transition::Pending { ticks_left } => {
                self.transition = Transition::Pending {
                    ticks_left: ticks_left - 1,
                };
                None
            }
        }
    }

    /// Reset the player to the spawn point with a hard camera jolt. The
    /// level and world are untouched.
    pub fn respawn(&mut self) {
        self.player = Player::at_spawn();
        self.shake = RESPAWN_SHAKE;
    }
}
