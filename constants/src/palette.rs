use bevy::color::Color;

pub struct Swatch {
    pub name: &'static str,
    pub color: Color,
}

pub const SWATCHES: &[Swatch] = &[
    Swatch {
        name: "red",
        color: Color::srgb(1.0, 0.0, 0.0),
    },
    Swatch {
        name: "green",
        color: Color::srgb(0.0, 1.0, 0.0),
    },
    Swatch {
        name: "blue",
        color: Color::srgb(0.0, 0.0, 1.0),
    },
];

pub fn swatch_color(name: &str) -> Option<Color> {
    SWATCHES.iter().find(|s| s.name == name).map(|s| s.color)
}

// Panel chrome
pub const PANEL_BACKGROUND: Color = Color::srgb(0.10, 0.11, 0.13);
pub const PANEL_HEADER: Color = Color::srgb(0.14, 0.16, 0.20);
pub const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVERED: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
pub const BUTTON_DANGER: Color = Color::srgb(0.28, 0.10, 0.10);
pub const BUTTON_BORDER: Color = Color::srgba(0.0, 0.0, 0.0, 0.25);
pub const TEXT_PRIMARY: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_MUTED: Color = Color::srgb(0.70, 0.72, 0.76);

// Scene
pub const FLOOR_COLOR: Color = Color::srgb(0.32, 0.34, 0.30);
