//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here: the player, the session
//! state (active world, level index, transition latch, camera shake), and
//! the decorative background state that feeds rendering only.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use super::level::{Level, LevelError, Rect};
use super::transition::Transition;

/// One of the two parallel collision/rendering contexts. Both share the
/// same coordinate space; only the active geometry differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum World {
    Surface,
    Beneath,
}

impl World {
    /// The other world.
    #[inline]
    pub fn flipped(self) -> World {
        match self {
            World::Surface => World::Beneath,
            World::Beneath => World::Surface,
        }
    }

    /// Display name for the HUD.
    pub fn as_str(self) -> &'static str {
        match self {
            World::Surface => "SURFACE",
            World::Beneath => "BENEATH",
        }
    }
}

/// The player character. Size is constant; `grounded` is re-derived from
/// scratch every tick and is true only when a platform landing resolved in
/// that same tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub grounded: bool,
}

impl Player {
    /// The player at the spawn point, at rest.
    pub fn at_spawn() -> Self {
        Self {
            pos: Vec2::new(SPAWN_X, SPAWN_Y),
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Collision rectangle at the current position.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// One rising mote in the beneath world's background.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mote {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

/// Decorative background state: cloud drift on the surface, rising motes
/// beneath. Cosmetic only — the collision core never reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ambient {
    pub cloud_offset: f32,
    pub motes: Vec<Mote>,
}

impl Ambient {
    /// Seed the mote field deterministically.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let motes = (0..MOTE_COUNT)
            .map(|_| Mote {
                pos: Vec2::new(
                    rng.random_range(0.0..CANVAS_WIDTH),
                    rng.random_range(0.0..CANVAS_HEIGHT),
                ),
                size: rng.random_range(0.5..3.5),
                speed: rng.random_range(0.2..0.7),
            })
            .collect();
        Self {
            cloud_offset: 0.0,
            motes,
        }
    }

    /// Advance the drift one tick. Motes rise and wrap at the top.
    pub fn step(&mut self) {
        self.cloud_offset += CLOUD_DRIFT;
        for mote in &mut self.motes {
            mote.pos.y -= mote.speed;
            if mote.pos.y < 0.0 {
                mote.pos.y = CANVAS_HEIGHT;
            }
        }
    }
}

/// Complete session state.
///
/// Consolidates what the game tracks across a run: the start gate, the
/// active world, the level cursor, the world-flip latch, camera shake, and
/// the campaign itself. One instance per run, mutated only by the tick
/// sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Start gate: flips true on the first input and never resets.
    pub started: bool,
    /// Currently active world. Flips only when a pending transition fires.
    pub world: World,
    /// Index into `levels`; monotonically non-decreasing.
    pub level_index: usize,
    /// Debounced world-flip latch.
    pub transition: Transition,
    /// Camera shake magnitude. Jolts override the decay.
    pub shake: f32,
    /// Terminal state: the final level's door was entered.
    pub complete: bool,
    /// The campaign. Only per-level switch progress mutates during play.
    pub levels: Vec<Level>,
    pub player: Player,
    /// Simulation tick counter.
    pub time_ticks: u64,
    /// Background decoration (rendering only).
    #[serde(skip)]
    pub ambient: Ambient,
}

impl GameState {
    /// Build a session over `levels`, validating geometry up front. The seed
    /// only feeds the decorative mote field; gameplay has no randomness.
    pub fn new(levels: Vec<Level>, seed: u64) -> Result<Self, LevelError> {
        for level in &levels {
            level.validate()?;
        }
        Ok(Self {
            started: false,
            world: World::Surface,
            level_index: 0,
            transition: Transition::Idle,
            shake: 0.0,
            complete: false,
            levels,
            player: Player::at_spawn(),
            time_ticks: 0,
            ambient: Ambient::seeded(seed),
        })
    }

    /// The active level.
    #[inline]
    pub fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }
}
