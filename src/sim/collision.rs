//! Collision resolution
//!
//! World-filtered AABB sweep over the active level's geometry in declaration
//! order. The player rect is recomputed after every resolution, so later
//! objects see earlier position writes — last write wins within a tick.
//! A respawn (spike) or a level advance (door) ends the pass for that tick.

use crate::consts::PLAYER_HEIGHT;
use super::level::ObjectKind;
use super::state::{GameState, World};
use super::tick::GameEvent;

/// Resolve the player against the current world's geometry for one tick.
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.player.grounded = false;

    let world = state.world;
    let level_index = state.level_index;

    for i in 0..state.levels[level_index].objects.len() {
        let obj = state.levels[level_index].objects[i];
        if !obj.world.contains(world) {
            continue;
        }
        if !state.player.rect().overlaps(&obj.rect) {
            continue;
        }

        match obj.kind {
            ObjectKind::Spike => {
                state.respawn();
                events.push(GameEvent::Respawned);
                return;
            }
            ObjectKind::Platform => {
                let player_mid = state.player.pos.y + PLAYER_HEIGHT / 2.0;
                if player_mid < obj.rect.mid_y() {
                    // Landing: snap on top.
                    state.player.pos.y = obj.rect.y - PLAYER_HEIGHT;
                    state.player.vel.y = 0.0;
                    state.player.grounded = true;
                } else {
                    // Head-bump from below: snap underneath, grounded unchanged.
                    state.player.pos.y = obj.rect.y + obj.rect.h;
                    state.player.vel.y = 0.0;
                }
            }
            ObjectKind::Switch => {
                if state.levels[level_index].activate_switch(i) {
                    events.push(GameEvent::SwitchActivated);
                }
            }
            ObjectKind::SwitchUsed => {}
            ObjectKind::Door => {
                let gate_open = state.levels[level_index].door_open();
                if state.complete || world != World::Beneath || !gate_open {
                    continue;
                }
                if state.level_index + 1 < state.levels.len() {
                    state.level_index += 1;
                    state.respawn();
                    events.push(GameEvent::LevelAdvanced(state.level_index));
                } else {
                    // Final door: explicit terminal state, never index past
                    // the last level.
                    state.complete = true;
                    state.respawn();
                    events.push(GameEvent::Completed);
                }
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{RESPAWN_SHAKE, SPAWN_X, SPAWN_Y};
    use crate::sim::level::{Level, LevelObject, ObjectKind, Rect, WorldTag};
    use crate::sim::state::Player;
    use glam::Vec2;

    fn object(rect: Rect, world: WorldTag, kind: ObjectKind) -> LevelObject {
        LevelObject::new(rect, world, kind)
    }

    fn state_with(level: Level) -> GameState {
        let mut state = GameState::new(vec![level], 0).unwrap();
        state.started = true;
        state
    }

    fn place_player(state: &mut GameState, x: f32, y: f32) {
        state.player = Player {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            grounded: false,
        };
    }

    #[test]
    fn test_no_overlap_only_clears_grounded() {
        let level = Level::new(
            "empty",
            0,
            vec![object(
                Rect::new(500.0, 450.0, 100.0, 20.0),
                WorldTag::Both,
                ObjectKind::Platform,
            )],
        );
        let mut state = state_with(level);
        place_player(&mut state, 50.0, 100.0);
        state.player.grounded = true;

        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert!(!state.player.grounded);
        assert!(events.is_empty());
        assert_eq!(state.player.pos, Vec2::new(50.0, 100.0));
    }

    #[test]
    fn test_platform_landing_from_above() {
        let level = Level::new(
            "floor",
            0,
            vec![object(
                Rect::new(0.0, 450.0, 600.0, 50.0),
                WorldTag::Both,
                ObjectKind::Platform,
            )],
        );
        let mut state = state_with(level);
        // Player midpoint above the platform midpoint, overlapping its top.
        place_player(&mut state, 100.0, 420.0);
        state.player.vel.y = 8.0;

        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert_eq!(state.player.pos.y, 450.0 - PLAYER_HEIGHT);
        assert_eq!(state.player.vel.y, 0.0);
        assert!(state.player.grounded);
    }

    #[test]
    fn test_platform_head_bump_from_below() {
        let level = Level::new(
            "ceiling",
            0,
            vec![object(
                Rect::new(0.0, 100.0, 600.0, 20.0),
                WorldTag::Both,
                ObjectKind::Platform,
            )],
        );
        let mut state = state_with(level);
        // Player midpoint below the platform midpoint, overlapping its base.
        place_player(&mut state, 100.0, 115.0);
        state.player.vel.y = -10.0;

        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert_eq!(state.player.pos.y, 120.0);
        assert_eq!(state.player.vel.y, 0.0);
        assert!(!state.player.grounded);
    }

    #[test]
    fn test_world_filtering_blocks_other_world() {
        let level = Level::new(
            "filtered",
            0,
            vec![object(
                Rect::new(40.0, 290.0, 50.0, 50.0),
                WorldTag::Surface,
                ObjectKind::Spike,
            )],
        );
        let mut state = state_with(level);
        state.world = World::Beneath;
        place_player(&mut state, 50.0, 300.0);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        // Identical coordinates, wrong world: no effect at all.
        assert!(events.is_empty());
        assert_eq!(state.player.pos, Vec2::new(50.0, 300.0));
    }

    #[test]
    fn test_spike_respawns_and_ends_pass() {
        let level = Level::new(
            "spiked",
            0,
            vec![
                object(
                    Rect::new(380.0, 290.0, 60.0, 60.0),
                    WorldTag::Both,
                    ObjectKind::Spike,
                ),
                // Would relabel if the pass kept going; it must not.
                object(
                    Rect::new(380.0, 290.0, 60.0, 60.0),
                    WorldTag::Both,
                    ObjectKind::Switch,
                ),
            ],
        );
        let mut state = state_with(level);
        place_player(&mut state, 400.0, 300.0);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert_eq!(events, vec![GameEvent::Respawned]);
        assert_eq!(state.player.pos, Vec2::new(SPAWN_X, SPAWN_Y));
        assert_eq!(state.shake, RESPAWN_SHAKE);
        assert_eq!(state.levels[0].switches_activated, 0);
        assert_eq!(state.levels[0].objects[1].kind, ObjectKind::Switch);
    }

    #[test]
    fn test_switch_activates_once_across_ticks() {
        let level = Level::new(
            "switch",
            1,
            vec![object(
                Rect::new(50.0, 300.0, 30.0, 30.0),
                WorldTag::Both,
                ObjectKind::Switch,
            )],
        );
        let mut state = state_with(level);
        place_player(&mut state, 50.0, 300.0);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert_eq!(events, vec![GameEvent::SwitchActivated]);
        assert_eq!(state.levels[0].switches_activated, 1);

        // Still overlapping next tick: the used switch is inert.
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.levels[0].switches_activated, 1);
    }

    fn gated_level() -> Level {
        Level::new(
            "gated",
            1,
            vec![
                object(
                    Rect::new(200.0, 300.0, 30.0, 30.0),
                    WorldTag::Beneath,
                    ObjectKind::Switch,
                ),
                object(
                    Rect::new(400.0, 300.0, 40.0, 40.0),
                    WorldTag::Beneath,
                    ObjectKind::Door,
                ),
            ],
        )
    }

    #[test]
    fn test_door_closed_until_switches_satisfied() {
        let mut state = GameState::new(vec![gated_level(), gated_level()], 0).unwrap();
        state.started = true;
        state.world = World::Beneath;

        // Door first, gate unsatisfied: nothing happens.
        place_player(&mut state, 400.0, 300.0);
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.level_index, 0);

        // Activate the switch, then the door.
        place_player(&mut state, 200.0, 300.0);
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert_eq!(events, vec![GameEvent::SwitchActivated]);

        place_player(&mut state, 400.0, 300.0);
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert_eq!(events, vec![GameEvent::LevelAdvanced(1)]);
        assert_eq!(state.level_index, 1);
        assert_eq!(state.player.pos, Vec2::new(SPAWN_X, SPAWN_Y));
        // The next level has its own fresh counter.
        assert_eq!(state.level().switches_activated, 0);
    }

    #[test]
    fn test_door_ignored_on_surface() {
        let mut state = state_with(Level::new(
            "surface-door",
            0,
            vec![object(
                Rect::new(40.0, 290.0, 40.0, 40.0),
                WorldTag::Both,
                ObjectKind::Door,
            )],
        ));
        place_player(&mut state, 50.0, 300.0);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.level_index, 0);
    }

    #[test]
    fn test_final_door_enters_terminal_state() {
        let mut state = state_with(Level::new(
            "last",
            0,
            vec![object(
                Rect::new(40.0, 290.0, 40.0, 40.0),
                WorldTag::Beneath,
                ObjectKind::Door,
            )],
        ));
        state.world = World::Beneath;
        place_player(&mut state, 50.0, 300.0);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert_eq!(events, vec![GameEvent::Completed]);
        assert!(state.complete);
        assert_eq!(state.level_index, 0);

        // Re-entering the door after completion is inert.
        place_player(&mut state, 50.0, 300.0);
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_declaration_order_last_write_wins() {
        // Two platforms overlap the player. Whichever resolves second gets
        // the final say on position — declaration order is observable policy.
        let floor = object(
            Rect::new(0.0, 450.0, 600.0, 50.0),
            WorldTag::Both,
            ObjectKind::Platform,
        );
        let ceiling = object(
            Rect::new(0.0, 420.0, 600.0, 10.0),
            WorldTag::Both,
            ObjectKind::Platform,
        );

        let mut state = state_with(Level::new("fc", 0, vec![floor, ceiling]));
        place_player(&mut state, 100.0, 425.0);
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        // Floor first: landing snaps to y = 410, which still overlaps the
        // ceiling band, whose head-bump then wins the position.
        assert_eq!(state.player.pos.y, 430.0);
        assert!(state.player.grounded);

        let mut state = state_with(Level::new("cf", 0, vec![ceiling, floor]));
        place_player(&mut state, 100.0, 425.0);
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        // Ceiling first: bump to y = 430, then the floor lands the player
        // at y = 410.
        assert_eq!(state.player.pos.y, 410.0);
        assert!(state.player.grounded);
    }
}
