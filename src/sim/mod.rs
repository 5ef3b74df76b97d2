//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock reads: the deferred world flip is a tick counter
//! - Stable iteration order (declaration order of level geometry)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod levels;
pub mod physics;
pub mod state;
pub mod tick;
pub mod transition;

pub use level::{Level, LevelError, LevelObject, ObjectKind, Rect, WorldTag};
pub use levels::campaign;
pub use state::{Ambient, GameState, Mote, Player, World};
pub use tick::{tick, GameEvent, TickInput};
pub use transition::Transition;
