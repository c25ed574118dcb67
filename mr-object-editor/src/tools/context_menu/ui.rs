use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use super::actions::StepAction;
use super::interactions::MenuButtonAction;
use super::panels::{PanelTag, WorldAnchor};
use super::{MenuButton, MenuPanel};
use crate::engine::runtime::PanelId;
use crate::engine::scene_bridge::UiSurface;
use constants::palette::*;

// Button with a centred label; `marker` decides what pressing it does
pub fn spawn_labeled_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    background: Color,
    marker: impl Bundle,
) {
    parent
        .spawn((
            marker,
            Button,
            UiSurface,
            Name::new(format!("{label}Button")),
            BackgroundColor(background),
            BorderColor(BUTTON_BORDER),
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(32.0),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont { font_size: 15.0, ..default() },
                TextColor(TEXT_PRIMARY),
            ));
        });
}

fn panel_buttons(panel: MenuPanel) -> Vec<(&'static str, MenuButton, Color)> {
    match panel {
        MenuPanel::Root => vec![
            ("Scale", MenuButton::Open(MenuPanel::Scale), BUTTON_IDLE),
            ("Rotation", MenuButton::Open(MenuPanel::Rotation), BUTTON_IDLE),
            ("Position", MenuButton::Open(MenuPanel::Position), BUTTON_IDLE),
            ("Color", MenuButton::Open(MenuPanel::Color), BUTTON_IDLE),
            ("Delete", MenuButton::Delete, BUTTON_DANGER),
            ("Close", MenuButton::Close, BUTTON_IDLE),
        ],
        tool => StepAction::on_panel(tool)
            .iter()
            .map(|a| (a.label(), MenuButton::Step(*a), BUTTON_IDLE))
            .chain(std::iter::once(("Back", MenuButton::Back, BUTTON_IDLE)))
            .collect(),
    }
}

// Spawns the contextual menu container with one hidden sub-panel per menu panel
pub fn spawn_context_menu_ui(mut commands: Commands) {
    commands
        .spawn((
            PanelTag(PanelId::ContextMenu),
            WorldAnchor::default(),
            UiSurface,
            Interaction::default(),
            Name::new("ContextMenu"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                width: Val::Px(180.0),
                position_type: PositionType::Absolute,
                display: Display::None,
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|menu| {
            for panel in MenuPanel::ALL {
                menu.spawn((
                    PanelTag(PanelId::Menu(panel)),
                    Name::new(format!("{}Panel", panel.title())),
                    Node {
                        width: Val::Percent(100.0),
                        display: Display::None,
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(6.0),
                        ..default()
                    },
                ))
                .with_children(|body| {
                    body.spawn((
                        Text::new(panel.title()),
                        TextFont { font_size: 17.0, ..default() },
                        TextColor(TEXT_PRIMARY),
                        BackgroundColor(PANEL_HEADER),
                    ));
                    for (label, button, color) in panel_buttons(panel) {
                        spawn_labeled_button(body, label, color, MenuButtonAction(button));
                    }
                });
            }
        });
}
