//! Samples desktop devices into pointer rays and a `FrameInput`.
//!
//! | Action              | Keyboard / mouse  | Gamepad        |
//! |---------------------|-------------------|----------------|
//! | Place               | Left click        | South          |
//! | Select              | Right click       | East           |
//! | Delete              | Delete, Backspace | West           |
//! | Toggle edit mode    | Tab               | North          |
//! | Primary stick       | Arrow keys        | Right stick    |
//! | Secondary stick (Y) | W / S             | Left stick     |
//!
//! The primary pointer is the mouse ray. The secondary is the camera's gaze ray, live while G
//! is held or a gamepad is connected.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::runtime::{Pointer, UiHit, WorldHit};
use crate::engine::scene_bridge::{LocalBounds, UiSurface};
use crate::tools::object_editor::ray::ray_hits_obb;
use crate::tools::object_editor::state::{FrameInput, JoystickInput};
use constants::interaction::STICK_DEADZONE;

/// Pointer whose casts were computed when the frame was sampled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampledPointer {
    pub ui: Option<UiHit>,
    pub world: Option<WorldHit>,
}

impl Pointer for SampledPointer {
    fn cast_ui(&self) -> Option<UiHit> {
        self.ui
    }

    fn cast_world(&self) -> Option<WorldHit> {
        self.world
    }
}

/// Pointers (primary first) and device input for the current frame.
#[derive(Resource, Default)]
pub struct FrameSample {
    pub pointers: Vec<SampledPointer>,
    pub input: FrameInput,
}

/// Nearest hit of `ray` among all boxed entities.
pub fn cast_boxes<'a>(
    ray: Ray3d,
    boxes: impl Iterator<Item = (Entity, &'a GlobalTransform, &'a LocalBounds)>,
) -> Option<WorldHit> {
    let origin = ray.origin;
    let dir = ray.direction.as_vec3();

    let mut best: Option<WorldHit> = None;
    for (entity, xf, LocalBounds(local)) in boxes {
        let Some(hit) = ray_hits_obb(origin, dir, xf, local.min(), local.max()) else {
            continue;
        };
        if best.is_none_or(|b| hit.t < b.distance) {
            best = Some(WorldHit {
                point: origin + dir * hit.t,
                normal: hit.normal,
                entity,
                distance: hit.t,
            });
        }
    }
    best
}

fn deadzone(v: Vec2) -> Vec2 {
    let axis = |a: f32| if a.abs() < STICK_DEADZONE { 0.0 } else { a.clamp(-1.0, 1.0) };
    Vec2::new(axis(v.x), axis(v.y))
}

fn key_axis(keys: &ButtonInput<KeyCode>, negative: KeyCode, positive: KeyCode) -> f32 {
    let mut v = 0.0;
    if keys.pressed(negative) {
        v -= 1.0;
    }
    if keys.pressed(positive) {
        v += 1.0;
    }
    v
}

pub fn sample_frame_input(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    ui: Query<(Entity, &Interaction), With<UiSurface>>,
    boxes: Query<(Entity, &GlobalTransform, &LocalBounds)>,
    mut sample: ResMut<FrameSample>,
) {
    sample.pointers.clear();

    if let Ok((cam_xf, camera)) = cameras.single() {
        // Primary: mouse ray, blocked by any hovered UI surface.
        let over_ui = ui
            .iter()
            .find(|(_, i)| **i != Interaction::None)
            .map(|(element, _)| UiHit { element });
        let mouse_ray = windows
            .single()
            .ok()
            .and_then(|w| w.cursor_position())
            .and_then(|cursor| camera.viewport_to_world(cam_xf, cursor).ok());
        sample.pointers.push(SampledPointer {
            ui: over_ui,
            world: mouse_ray.and_then(|ray| cast_boxes(ray, boxes.iter())),
        });

        // Secondary: gaze straight ahead.
        if keys.pressed(KeyCode::KeyG) || !gamepads.is_empty() {
            let gaze = Ray3d::new(cam_xf.translation(), cam_xf.forward());
            sample.pointers.push(SampledPointer {
                ui: None,
                world: cast_boxes(gaze, boxes.iter()),
            });
        }
    }

    let mut input = FrameInput {
        delta_seconds: time.delta_secs(),
        select: mouse.just_pressed(MouseButton::Right),
        place: mouse.just_pressed(MouseButton::Left),
        delete: keys.any_just_pressed([KeyCode::Delete, KeyCode::Backspace]),
        toggle_edit_mode: keys.just_pressed(KeyCode::Tab),
        sticks: JoystickInput {
            primary: Vec2::new(
                key_axis(&keys, KeyCode::ArrowLeft, KeyCode::ArrowRight),
                key_axis(&keys, KeyCode::ArrowDown, KeyCode::ArrowUp),
            ),
            secondary: Vec2::new(0.0, key_axis(&keys, KeyCode::KeyS, KeyCode::KeyW)),
        },
        menu_buttons: Vec::new(),
    };

    for gamepad in &gamepads {
        input.place |= gamepad.just_pressed(GamepadButton::South);
        input.select |= gamepad.just_pressed(GamepadButton::East);
        input.delete |= gamepad.just_pressed(GamepadButton::West);
        input.toggle_edit_mode |= gamepad.just_pressed(GamepadButton::North);
        input.sticks.primary += gamepad.right_stick();
        input.sticks.secondary += gamepad.left_stick();
    }

    input.sticks.primary = deadzone(input.sticks.primary);
    input.sticks.secondary = deadzone(input.sticks.secondary);
    sample.input = input;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pose::Bounds;
    use bevy::ecs::world::World;

    #[test]
    fn nearest_box_wins() {
        let mut world = World::new();
        let (near, far) = (world.spawn_empty().id(), world.spawn_empty().id());
        let unit = LocalBounds(Bounds::new(Vec3::ZERO, Vec3::splat(0.5)));
        let near_xf = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -3.0));
        let far_xf = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -8.0));

        let ray = Ray3d::new(Vec3::ZERO, Dir3::NEG_Z);
        let boxes = [(far, &far_xf, &unit), (near, &near_xf, &unit)];
        let hit = cast_boxes(ray, boxes.into_iter()).expect("hit");
        assert_eq!(hit.entity, near);
        assert!((hit.distance - 2.5).abs() < 1e-4);
        assert!((hit.point - Vec3::new(0.0, 0.0, -2.5)).length() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn deadzone_zeroes_small_axes_exactly() {
        assert_eq!(deadzone(Vec2::new(0.1, -0.9)), Vec2::new(0.0, -0.9));
        assert_eq!(deadzone(Vec2::new(2.0, 0.0)), Vec2::new(1.0, 0.0));
    }
}
