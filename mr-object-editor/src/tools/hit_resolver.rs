use crate::engine::runtime::{Pointer, UiHit, WorldHit};

/// Outcome of hit-testing every pointer for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Resolution {
    /// First world hit in pointer order. Always `None` while over UI.
    pub hit: Option<WorldHit>,
    pub over_ui: bool,
    /// UI element that consumed the frame, if any.
    pub ui: Option<UiHit>,
}

/// Resolve at most one world hit from pointers ordered primary first.
///
/// UI is tested on every pointer before any world test; a UI hit on any pointer consumes the
/// frame.
pub fn resolve<P: Pointer>(pointers: &[P]) -> Resolution {
    if let Some(ui) = pointers.iter().find_map(|p| p.cast_ui()) {
        return Resolution {
            hit: None,
            over_ui: true,
            ui: Some(ui),
        };
    }

    Resolution {
        hit: pointers.iter().find_map(|p| p.cast_world()),
        over_ui: false,
        ui: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::world::World;
    use bevy::math::Vec3;

    #[derive(Default)]
    struct Stub {
        ui: Option<UiHit>,
        world: Option<WorldHit>,
    }

    impl Pointer for Stub {
        fn cast_ui(&self) -> Option<UiHit> {
            self.ui
        }
        fn cast_world(&self) -> Option<WorldHit> {
            self.world
        }
    }

    fn hit(world: &mut World, x: f32) -> WorldHit {
        WorldHit {
            point: Vec3::new(x, 0.0, 0.0),
            normal: Vec3::Y,
            entity: world.spawn_empty().id(),
            distance: 1.0,
        }
    }

    #[test]
    fn primary_wins_over_secondary() {
        let mut world = World::new();
        let (a, b) = (hit(&mut world, 1.0), hit(&mut world, 2.0));
        let pointers = [
            Stub { world: Some(a), ..Default::default() },
            Stub { world: Some(b), ..Default::default() },
        ];
        let r = resolve(&pointers);
        assert_eq!(r.hit, Some(a));
        assert!(!r.over_ui);
    }

    #[test]
    fn secondary_used_when_primary_misses() {
        let mut world = World::new();
        let b = hit(&mut world, 2.0);
        let pointers = [Stub::default(), Stub { world: Some(b), ..Default::default() }];
        assert_eq!(resolve(&pointers).hit, Some(b));
    }

    #[test]
    fn ui_on_any_pointer_consumes_the_frame() {
        let mut world = World::new();
        let a = hit(&mut world, 1.0);
        let element = world.spawn_empty().id();
        let pointers = [
            Stub { world: Some(a), ..Default::default() },
            Stub { ui: Some(UiHit { element }), ..Default::default() },
        ];
        let r = resolve(&pointers);
        assert!(r.over_ui);
        assert_eq!(r.hit, None);
        assert_eq!(r.ui, Some(UiHit { element }));
    }

    #[test]
    fn no_pointers_resolves_to_nothing() {
        let r = resolve::<Stub>(&[]);
        assert_eq!(r, Resolution::default());
    }
}
