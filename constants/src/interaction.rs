/// Vertical gap between the top of a selected instance and its contextual menu.
pub const MENU_HEIGHT_OFFSET: f32 = 1.5;

/// Lowest value any scale component may reach.
pub const MIN_SCALE: f32 = 0.1;

// Joystick rates, applied per second of frame time.
pub const JOYSTICK_SCALE_RATE: f32 = 1.0;
pub const JOYSTICK_ROTATION_RATE_DEG: f32 = 100.0;
pub const JOYSTICK_MOVE_RATE: f32 = 2.0;

// Discrete steps used by the contextual menu tool panels.
pub const MENU_SCALE_STEP: f32 = 0.2;
pub const MENU_ROTATE_STEP_DEG: f32 = 45.0;
pub const MENU_MOVE_STEP: f32 = 0.3;

/// Edge length of the cube assumed for entities that report no bounds.
pub const FALLBACK_BOUNDS_SIZE: f32 = 1.0;

/// Analog readings with a smaller magnitude are treated as exactly zero.
pub const STICK_DEADZONE: f32 = 0.15;
