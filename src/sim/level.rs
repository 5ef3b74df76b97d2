//! Level geometry store
//!
//! A level is an ordered list of world-tagged axis-aligned rectangles, each
//! carrying a behavior tag, plus the level's switch-activation counter.
//! Iteration order is declaration order — the resolver depends on it for
//! tie-breaking simultaneous overlaps. Objects are never removed during play;
//! a used switch is relabeled in place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::World;

/// Axis-aligned rectangle in canvas coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// AABB overlap test. Strict inequalities: edge-touching rectangles do
    /// not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Vertical midpoint, used by the landing/head-bump split.
    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.y + self.h / 2.0
    }
}

/// Which world(s) an object is collidable (and visible) in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldTag {
    Surface,
    Beneath,
    Both,
}

impl WorldTag {
    #[inline]
    pub fn contains(self, world: World) -> bool {
        match self {
            WorldTag::Both => true,
            WorldTag::Surface => world == World::Surface,
            WorldTag::Beneath => world == World::Beneath,
        }
    }
}

/// Object behavior tag.
///
/// The only legal transition is `Switch` → `SwitchUsed`, performed by
/// [`Level::activate_switch`]; nothing else ever changes a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Solid ground: lands the player from above, bumps from below.
    Platform,
    /// Lethal: resets the player to spawn on contact.
    Spike,
    /// Activatable once; counts toward the level's door gate.
    Switch,
    /// A spent switch. Inert.
    SwitchUsed,
    /// Exit: advances the level when touched beneath with the gate satisfied.
    Door,
}

/// One rectangle of level geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelObject {
    pub rect: Rect,
    pub world: WorldTag,
    pub kind: ObjectKind,
}

impl LevelObject {
    pub const fn new(rect: Rect, world: WorldTag, kind: ObjectKind) -> Self {
        Self { rect, world, kind }
    }
}

/// Validation failure for a level definition. Raised at load time only —
/// per-tick logic never fails.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level {level:?}: object {index} has degenerate size {w}x{h}")]
    DegenerateRect {
        level: String,
        index: usize,
        w: f32,
        h: f32,
    },
}

/// A named level: ordered geometry plus the switch progress gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Declaration order matters; see module docs.
    pub objects: Vec<LevelObject>,
    /// Monotonically non-decreasing for the level's lifetime.
    pub switches_activated: u32,
    pub required_switches: u32,
}

impl Level {
    pub fn new(name: &str, required_switches: u32, objects: Vec<LevelObject>) -> Self {
        Self {
            name: name.to_string(),
            objects,
            switches_activated: 0,
            required_switches,
        }
    }

    /// Objects collidable in `world`, with their declaration indices, in
    /// declaration order. Restartable and finite.
    pub fn visible_in(&self, world: World) -> impl Iterator<Item = (usize, &LevelObject)> {
        self.objects
            .iter()
            .enumerate()
            .filter(move |(_, obj)| obj.world.contains(world))
    }

    /// Relabel the switch at `index` and count it. Returns whether it
    /// counted; an already-used switch never double-counts.
    pub fn activate_switch(&mut self, index: usize) -> bool {
        let obj = &mut self.objects[index];
        if obj.kind != ObjectKind::Switch {
            return false;
        }
        obj.kind = ObjectKind::SwitchUsed;
        self.switches_activated += 1;
        true
    }

    /// Whether the door gate is satisfied.
    #[inline]
    pub fn door_open(&self) -> bool {
        self.switches_activated >= self.required_switches
    }

    /// Reject physically impossible geometry before the simulation starts.
    pub fn validate(&self) -> Result<(), LevelError> {
        for (index, obj) in self.objects.iter().enumerate() {
            if obj.rect.w <= 0.0 || obj.rect.h <= 0.0 {
                return Err(LevelError::DegenerateRect {
                    level: self.name.clone(),
                    index,
                    w: obj.rect.w,
                    h: obj.rect.h,
                });
            }
        }
        Ok(())
    }
}
