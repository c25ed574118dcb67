use bevy::prelude::*;

use super::state::{EditorSettings, JoystickInput};
use crate::engine::pose::{offset_scale_clamped, yaw_world};
use crate::tools::edit_mode::EditMode;

/// New transform for one frame of joystick input, or `None` when nothing should be written.
///
/// ScaleAndRotate: secondary Y scales uniformly, primary X yaws about world up.
/// Position: primary (X, Y) moves along the ground plane as (x, 0, y).
/// An axis reading of exactly zero contributes nothing.
pub fn apply_joysticks(
    current: &Transform,
    mode: EditMode,
    sticks: JoystickInput,
    delta_seconds: f32,
    settings: &EditorSettings,
) -> Option<Transform> {
    let mut next = *current;
    let mut changed = false;

    match mode {
        EditMode::ScaleAndRotate => {
            if sticks.secondary.y != 0.0 {
                let delta = sticks.secondary.y * settings.scale_rate * delta_seconds;
                next.scale = offset_scale_clamped(next.scale, delta, settings.min_scale);
                changed = true;
            }
            if sticks.primary.x != 0.0 {
                let degrees = sticks.primary.x * settings.rotation_rate_deg * delta_seconds;
                next.rotation = yaw_world(next.rotation, degrees);
                changed = true;
            }
        }
        EditMode::Position => {
            if sticks.primary != Vec2::ZERO {
                let step = Vec3::new(sticks.primary.x, 0.0, sticks.primary.y)
                    * settings.move_rate
                    * delta_seconds;
                next.translation += step;
                changed = true;
            }
        }
    }

    changed.then_some(next)
}
