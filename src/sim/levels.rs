//! Static campaign definitions
//!
//! Geometry tables in canvas coordinates, declaration order significant.
//! Levels are built in code at startup; there is no level file format.

use super::level::{Level, LevelObject, ObjectKind, Rect, WorldTag};

const fn object(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    world: WorldTag,
    kind: ObjectKind,
) -> LevelObject {
    LevelObject::new(Rect::new(x, y, w, h), world, kind)
}

/// The shipped campaign.
pub fn campaign() -> Vec<Level> {
    use ObjectKind::{Door, Platform, Spike, Switch};
    use WorldTag::{Beneath, Both, Surface};

    vec![
        Level::new(
            "Awareness",
            1,
            vec![
                object(0.0, 450.0, 600.0, 50.0, Both, Platform),
                object(200.0, 350.0, 150.0, 20.0, Surface, Platform),
                object(400.0, 300.0, 120.0, 20.0, Beneath, Platform),
                object(600.0, 450.0, 300.0, 50.0, Surface, Platform),
                object(650.0, 250.0, 30.0, 30.0, Surface, Switch),
                object(820.0, 410.0, 40.0, 40.0, Beneath, Door),
            ],
        ),
        Level::new(
            "Consequences",
            0,
            vec![
                object(0.0, 450.0, 300.0, 50.0, Both, Platform),
                // The same shelf is safe footing on the surface and lethal
                // beneath.
                object(350.0, 380.0, 200.0, 20.0, Surface, Platform),
                object(350.0, 380.0, 200.0, 20.0, Beneath, Spike),
                object(350.0, 250.0, 100.0, 20.0, Both, Platform),
                object(550.0, 200.0, 100.0, 20.0, Both, Platform),
                object(750.0, 450.0, 150.0, 50.0, Both, Platform),
                object(820.0, 410.0, 40.0, 40.0, Beneath, Door),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_validates() {
        for level in campaign() {
            level.validate().unwrap();
        }
    }

    #[test]
    fn test_campaign_shape() {
        let levels = campaign();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].name, "Awareness");
        assert_eq!(levels[0].required_switches, 1);
        assert_eq!(levels[1].name, "Consequences");
        assert_eq!(levels[1].required_switches, 0);

        // Every level must have a beneath-reachable door.
        for level in &levels {
            assert!(level.objects.iter().any(|o| o.kind == ObjectKind::Door
                && o.world != WorldTag::Surface));
        }
    }

    #[test]
    fn test_required_switches_are_satisfiable() {
        for level in campaign() {
            let switches = level
                .objects
                .iter()
                .filter(|o| o.kind == ObjectKind::Switch)
                .count() as u32;
            assert!(level.required_switches <= switches);
        }
    }
}
