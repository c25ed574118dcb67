use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::placement::{PlacedInstance, PlacementError};
use crate::tools::context_menu::MenuButton;
use crate::tools::edit_mode::EditMode;
use constants::interaction::*;

/// Tunable rates and steps. Any field missing from configuration keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub menu_height_offset: f32,
    pub min_scale: f32,
    /// Scale units per second at full stick deflection.
    pub scale_rate: f32,
    /// Degrees per second at full stick deflection.
    pub rotation_rate_deg: f32,
    /// World units per second at full stick deflection.
    pub move_rate: f32,
    pub scale_step: f32,
    pub rotate_step_deg: f32,
    pub move_step: f32,
    pub default_edit_mode: EditMode,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            menu_height_offset: MENU_HEIGHT_OFFSET,
            min_scale: MIN_SCALE,
            scale_rate: JOYSTICK_SCALE_RATE,
            rotation_rate_deg: JOYSTICK_ROTATION_RATE_DEG,
            move_rate: JOYSTICK_MOVE_RATE,
            scale_step: MENU_SCALE_STEP,
            rotate_step_deg: MENU_ROTATE_STEP_DEG,
            move_step: MENU_MOVE_STEP,
            default_edit_mode: EditMode::default(),
        }
    }
}

/// Two-axis readings of both hand sticks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JoystickInput {
    /// Stick on the primary (first priority) device.
    pub primary: Vec2,
    /// Stick on the secondary device.
    pub secondary: Vec2,
}

/// Everything sampled from the host for one tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameInput {
    pub delta_seconds: f32,
    pub select: bool,
    pub place: bool,
    pub delete: bool,
    pub toggle_edit_mode: bool,
    pub sticks: JoystickInput,
    /// Contextual menu buttons pressed since the last tick, in press order.
    pub menu_buttons: Vec<MenuButton>,
}

/// What a tick did, for logging and tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickOutcome {
    pub over_ui: bool,
    pub placed: Option<PlacedInstance>,
    pub placement_error: Option<PlacementError>,
    /// Entity that became (or stayed) the selection target this tick.
    pub selected: Option<Entity>,
    pub deleted: Option<Entity>,
    /// Whether the manipulation loop wrote a new transform.
    pub manipulated: bool,
}
