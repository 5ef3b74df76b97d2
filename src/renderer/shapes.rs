//! Shape generation for 2D primitives
//!
//! Tessellates the game state into a flat colored-triangle list once per
//! frame. Everything here is read-only over the state.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{colors, Vertex};
use crate::consts::{CANVAS_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::sim::{GameState, ObjectKind, Rect, World};

/// Segments used to fan a disc (clouds)
const DISC_SEGMENTS: u32 = 12;

/// One assembled frame: triangle list plus the world's clear color.
pub struct Scene {
    pub vertices: Vec<Vertex>,
    pub clear_color: [f32; 4],
}

/// Push an axis-aligned rectangle as two triangles.
fn push_rect(out: &mut Vec<Vertex>, rect: Rect, color: [f32; 4]) {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.w, rect.y + rect.h);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x0, y1, color));
}

/// Push a disc as a triangle fan.
fn push_disc(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    for i in 0..DISC_SEGMENTS {
        let a0 = i as f32 / DISC_SEGMENTS as f32 * TAU;
        let a1 = (i + 1) as f32 / DISC_SEGMENTS as f32 * TAU;
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * a0.cos(),
            center.y + radius * a0.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * a1.cos(),
            center.y + radius * a1.sin(),
            color,
        ));
    }
}

fn object_color(kind: ObjectKind, world: World) -> [f32; 4] {
    match kind {
        ObjectKind::Spike => colors::SPIKE,
        ObjectKind::Switch => colors::SWITCH,
        ObjectKind::SwitchUsed => colors::SWITCH_USED,
        ObjectKind::Door => colors::DOOR,
        ObjectKind::Platform => match world {
            World::Surface => colors::PLATFORM_SURFACE,
            World::Beneath => colors::PLATFORM_BENEATH,
        },
    }
}

/// Deterministic per-frame shake jitter in canvas units.
fn shake_jitter(shake: f32, time_ticks: u64) -> Vec2 {
    if shake <= 0.0 {
        return Vec2::ZERO;
    }
    let hash = (time_ticks as u32).wrapping_mul(2654435761);
    let rx = (hash % 1000) as f32 / 1000.0;
    let ry = ((hash >> 10) % 1000) as f32 / 1000.0;
    Vec2::new(rx * shake - shake / 2.0, ry * shake - shake / 2.0)
}

/// Assemble the frame for the current state. `shake_scale` is 1.0 normally,
/// 0.0 when the player disabled screen shake.
pub fn build_scene(state: &GameState, shake_scale: f32) -> Scene {
    let world = state.world;
    let mut vertices = Vec::new();

    // Background decoration first, behind the geometry.
    match world {
        World::Surface => {
            for i in 0..5 {
                let x = (i as f32 * 250.0 + state.ambient.cloud_offset)
                    % (CANVAS_WIDTH + 200.0)
                    - 100.0;
                let y = 50.0 + i as f32 * 20.0;
                push_disc(&mut vertices, Vec2::new(x, y), 30.0, colors::CLOUD);
            }
        }
        World::Beneath => {
            for mote in &state.ambient.motes {
                push_rect(
                    &mut vertices,
                    Rect::new(mote.pos.x, mote.pos.y, mote.size, mote.size),
                    colors::MOTE,
                );
            }
        }
    }

    for (_, obj) in state.level().visible_in(world) {
        push_rect(&mut vertices, obj.rect, object_color(obj.kind, world));
    }

    let player_color = match world {
        World::Surface => colors::PLAYER_SURFACE,
        World::Beneath => colors::PLAYER_BENEATH,
    };
    push_rect(
        &mut vertices,
        Rect::new(
            state.player.pos.x,
            state.player.pos.y,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        ),
        player_color,
    );

    // Whole-scene jitter, like translating the canvas before drawing.
    let jitter = shake_jitter(state.shake * shake_scale, state.time_ticks);
    if jitter != Vec2::ZERO {
        for v in &mut vertices {
            v.position[0] += jitter.x;
            v.position[1] += jitter.y;
        }
    }

    let clear_color = match world {
        World::Surface => colors::SURFACE_SKY,
        World::Beneath => colors::BENEATH_DARK,
    };

    Scene {
        vertices,
        clear_color,
    }
}
