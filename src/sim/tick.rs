//! Fixed timestep simulation tick
//!
//! One tick = one physics pass followed by one collision pass, in a fixed
//! order; the platform layer runs ticks off a frame accumulator and renders
//! once per frame. Everything the platform layer must relay outward (audio
//! cross-fades, HUD refreshes) comes back as [`GameEvent`]s.

use super::collision;
use super::physics;
use super::state::{GameState, World};
use crate::consts::SHAKE_DECAY;

/// Input state for a single tick.
///
/// `left`/`right`/`jump` are level-triggered (held keys). `switch_world` and
/// `any_key` are edges; the platform layer clears them after the tick that
/// consumed them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub switch_world: bool,
    pub any_key: bool,
}

/// Something the simulation did this tick that the platform layer may need
/// to relay to the audio or HUD collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First input arrived; the session is live.
    Started,
    /// The pending world flip fired.
    WorldFlipped(World),
    /// A switch was relabeled and counted.
    SwitchActivated,
    /// The door advanced the session to this level index.
    LevelAdvanced(usize),
    /// The player was reset to the spawn point.
    Respawned,
    /// The final door was entered; terminal state.
    Completed,
}

/// Advance the simulation by one fixed step.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Start gate: inert until the first key press of the session.
    if !state.started {
        if input.any_key {
            state.started = true;
            events.push(GameEvent::Started);
        }
        return events;
    }

    state.time_ticks += 1;

    // Shake decays at the head of the tick so a jolt raised below survives
    // to the frame that renders it.
    state.shake *= SHAKE_DECAY;
    if state.shake < 0.01 {
        state.shake = 0.0;
    }

    // A pending flip fires before anything moves; until then collision runs
    // against the old world.
    if let Some(world) = state.step_transition() {
        events.push(GameEvent::WorldFlipped(world));
    }

    if input.switch_world {
        state.request_switch();
    }

    physics::integrate(&mut state.player, input);
    if physics::fell_out(&state.player) {
        state.respawn();
        events.push(GameEvent::Respawned);
    }

    collision::resolve(state, &mut events);

    state.ambient.step();

    events
}
