use bevy::prelude::*;

use super::MenuButton;
use constants::palette::{BUTTON_DANGER, BUTTON_HOVERED, BUTTON_IDLE, BUTTON_PRESSED};

/// What a contextual menu button does when pressed.
#[derive(Component, Debug, Clone, Copy)]
pub struct MenuButtonAction(pub MenuButton);

#[derive(Event, Debug, Clone, Copy)]
pub struct MenuButtonEvent(pub MenuButton);

// Forwards menu button presses to the editor and tints hovered/pressed buttons
pub fn menu_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor, &MenuButtonAction), (Changed<Interaction>, With<Button>)>,
    mut events: EventWriter<MenuButtonEvent>,
) {
    for (interaction, mut bg, action) in &mut q {
        let idle = if action.0 == MenuButton::Delete { BUTTON_DANGER } else { BUTTON_IDLE };
        match *interaction {
            Interaction::Pressed => {
                events.write(MenuButtonEvent(action.0));
                *bg = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVERED),
            Interaction::None => *bg = BackgroundColor(idle),
        }
    }
}
