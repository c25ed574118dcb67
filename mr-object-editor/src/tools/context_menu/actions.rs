use bevy::prelude::*;

use super::MenuPanel;
use crate::engine::pose::{multiply_scale_clamped, yaw_world};
use crate::tools::object_editor::state::EditorSettings;
use constants::palette::swatch_color;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwatchChoice {
    Red,
    Green,
    Blue,
    Random,
}

impl SwatchChoice {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Random => "random",
        }
    }
}

/// Buttons living on a tool panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepAction {
    ScaleUp,
    ScaleDown,
    ResetScale,
    RotateLeft,
    RotateRight,
    ResetRotation,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Recolor(SwatchChoice),
}

impl StepAction {
    /// Panel the button is placed on.
    pub fn panel(&self) -> MenuPanel {
        match self {
            Self::ScaleUp | Self::ScaleDown | Self::ResetScale => MenuPanel::Scale,
            Self::RotateLeft | Self::RotateRight | Self::ResetRotation => MenuPanel::Rotation,
            Self::MoveUp | Self::MoveDown | Self::MoveLeft | Self::MoveRight => MenuPanel::Position,
            Self::Recolor(_) => MenuPanel::Color,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ScaleUp => "Scale +",
            Self::ScaleDown => "Scale -",
            Self::ResetScale => "Reset scale",
            Self::RotateLeft => "Rotate left",
            Self::RotateRight => "Rotate right",
            Self::ResetRotation => "Upright",
            Self::MoveUp => "Up",
            Self::MoveDown => "Down",
            Self::MoveLeft => "Left",
            Self::MoveRight => "Right",
            Self::Recolor(SwatchChoice::Red) => "Red",
            Self::Recolor(SwatchChoice::Green) => "Green",
            Self::Recolor(SwatchChoice::Blue) => "Blue",
            Self::Recolor(SwatchChoice::Random) => "Random",
        }
    }

    /// Buttons of `panel` in display order.
    pub fn on_panel(panel: MenuPanel) -> &'static [StepAction] {
        match panel {
            MenuPanel::Root => &[],
            MenuPanel::Scale => &[Self::ScaleUp, Self::ScaleDown, Self::ResetScale],
            MenuPanel::Rotation => &[Self::RotateLeft, Self::RotateRight, Self::ResetRotation],
            MenuPanel::Position => &[Self::MoveUp, Self::MoveDown, Self::MoveLeft, Self::MoveRight],
            MenuPanel::Color => &[
                Self::Recolor(SwatchChoice::Red),
                Self::Recolor(SwatchChoice::Green),
                Self::Recolor(SwatchChoice::Blue),
                Self::Recolor(SwatchChoice::Random),
            ],
        }
    }
}

/// Transform after a geometric step. Recolour steps return the input unchanged.
pub fn apply_step(action: StepAction, current: &Transform, settings: &EditorSettings) -> Transform {
    let mut next = *current;
    match action {
        StepAction::ScaleUp => {
            next.scale = multiply_scale_clamped(next.scale, 1.0 + settings.scale_step, settings.min_scale);
        }
        StepAction::ScaleDown => {
            next.scale = multiply_scale_clamped(next.scale, 1.0 - settings.scale_step, settings.min_scale);
        }
        StepAction::ResetScale => next.scale = Vec3::ONE,
        StepAction::RotateLeft => next.rotation = yaw_world(next.rotation, -settings.rotate_step_deg),
        StepAction::RotateRight => next.rotation = yaw_world(next.rotation, settings.rotate_step_deg),
        StepAction::ResetRotation => next.rotation = Quat::IDENTITY,
        StepAction::MoveUp => next.translation += Vec3::Y * settings.move_step,
        StepAction::MoveDown => next.translation -= Vec3::Y * settings.move_step,
        StepAction::MoveLeft => next.translation -= Vec3::X * settings.move_step,
        StepAction::MoveRight => next.translation += Vec3::X * settings.move_step,
        StepAction::Recolor(_) => {}
    }
    next
}

/// Colour with three independent uniform channels.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::srgb(rng.r#gen::<f32>(), rng.r#gen::<f32>(), rng.r#gen::<f32>())
}

pub fn swatch<R: Rng + ?Sized>(choice: SwatchChoice, rng: &mut R) -> Color {
    match choice {
        SwatchChoice::Random => random_color(rng),
        named => swatch_color(named.label()).unwrap_or(Color::WHITE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_step_lives_on_exactly_its_panel() {
        for panel in MenuPanel::ALL {
            for action in StepAction::on_panel(panel) {
                assert_eq!(action.panel(), panel);
            }
        }
        assert!(StepAction::on_panel(MenuPanel::Root).is_empty());
    }

    #[test]
    fn scale_steps_multiply_and_reset() {
        let settings = EditorSettings::default();
        let xf = Transform::from_scale(Vec3::new(1.0, 2.0, 0.5));
        let up = apply_step(StepAction::ScaleUp, &xf, &settings);
        assert!((up.scale - Vec3::new(1.2, 2.4, 0.6)).length() < 1e-5);
        let down = apply_step(StepAction::ScaleDown, &xf, &settings);
        assert!((down.scale - Vec3::new(0.8, 1.6, 0.4)).length() < 1e-5);
        assert_eq!(apply_step(StepAction::ResetScale, &xf, &settings).scale, Vec3::ONE);
    }

    #[test]
    fn scale_down_respects_floor() {
        let settings = EditorSettings::default();
        let mut xf = Transform::IDENTITY;
        for _ in 0..40 {
            xf = apply_step(StepAction::ScaleDown, &xf, &settings);
        }
        assert_eq!(xf.scale, Vec3::splat(settings.min_scale));
    }

    #[test]
    fn rotate_steps_turn_about_world_up() {
        let settings = EditorSettings::default();
        let right = apply_step(StepAction::RotateRight, &Transform::IDENTITY, &settings);
        assert!(right.rotation.angle_between(Quat::from_rotation_y(45f32.to_radians())) < 1e-4);
        let back = apply_step(StepAction::RotateLeft, &right, &settings);
        assert!(back.rotation.angle_between(Quat::IDENTITY) < 1e-4);
        let upright = apply_step(StepAction::ResetRotation, &right, &settings);
        assert_eq!(upright.rotation, Quat::IDENTITY);
    }

    #[test]
    fn move_steps_follow_world_axes() {
        let settings = EditorSettings::default();
        let xf = Transform::from_xyz(1.0, 1.0, 1.0);
        let cases = [
            (StepAction::MoveUp, Vec3::new(1.0, 1.3, 1.0)),
            (StepAction::MoveDown, Vec3::new(1.0, 0.7, 1.0)),
            (StepAction::MoveLeft, Vec3::new(0.7, 1.0, 1.0)),
            (StepAction::MoveRight, Vec3::new(1.3, 1.0, 1.0)),
        ];
        for (action, expected) in cases {
            let next = apply_step(action, &xf, &settings);
            assert!((next.translation - expected).length() < 1e-5, "{action:?}");
        }
    }

    #[test]
    fn named_swatches_resolve_by_label() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(swatch(SwatchChoice::Red, &mut rng), Color::srgb(1.0, 0.0, 0.0));
        assert_eq!(swatch(SwatchChoice::Green, &mut rng), Color::srgb(0.0, 1.0, 0.0));
        assert_eq!(swatch(SwatchChoice::Blue, &mut rng), Color::srgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn random_channels_stay_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..256 {
            let c = swatch(SwatchChoice::Random, &mut rng).to_srgba();
            for channel in [c.red, c.green, c.blue] {
                assert!((0.0..=1.0).contains(&channel), "{c:?}");
            }
            assert_eq!(c.alpha, 1.0);
        }
    }

    #[test]
    fn random_picks_depend_on_the_generator_state() {
        let a = swatch(SwatchChoice::Random, &mut StdRng::seed_from_u64(1));
        let b = swatch(SwatchChoice::Random, &mut StdRng::seed_from_u64(2));
        assert_ne!(a, b);
    }
}
