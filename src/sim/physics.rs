//! Physics integration
//!
//! Pure per-tick transform of the player's motion. The order is fixed and
//! every constant is a per-tick quantity, so trajectories are bit-for-bit
//! reproducible for identical input sequences:
//!
//! 1. horizontal input acceleration (left and right may cancel)
//! 2. jump impulse, only while grounded
//! 3. gravity, unconditionally
//! 4. friction damping
//! 5. position integration

use crate::consts::*;
use super::state::Player;
use super::tick::TickInput;

/// Advance player motion one tick.
pub fn integrate(player: &mut Player, input: &TickInput) {
    if input.right {
        player.vel.x += MOVE_ACCEL;
    }
    if input.left {
        player.vel.x -= MOVE_ACCEL;
    }
    // Holding jump cannot re-trigger until a landing sets `grounded` again.
    if input.jump && player.grounded {
        player.vel.y = JUMP_VELOCITY;
        player.grounded = false;
    }

    player.vel.y += GRAVITY;
    player.vel.x *= FRICTION;
    player.pos += player.vel;
}

/// Whether the player fell past the bottom of the canvas this tick.
#[inline]
pub fn fell_out(player: &Player) -> bool {
    player.pos.y > CANVAS_HEIGHT
}
