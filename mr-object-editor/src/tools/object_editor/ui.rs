use bevy::prelude::*;

use super::interactions::{BackToCategoriesButton, CategoryButton, ItemButton};
use crate::engine::assets::catalog::CatalogItemRef;
use crate::engine::runtime::PanelId;
use crate::engine::scene_bridge::UiSurface;
use crate::tools::context_menu::panels::PanelTag;
use crate::tools::context_menu::ui::spawn_labeled_button;
use constants::palette::*;

#[derive(Component)]
pub struct CatalogBrowserRoot;
#[derive(Component)]
pub struct CategoryList;
#[derive(Component)]
pub struct ItemList;
#[derive(Component)]
pub struct StatusLabel;

// Spawns the catalog side panel: category list, item list (hidden) and status label
pub fn spawn_catalog_browser_ui(mut commands: Commands) {
    commands
        .spawn((
            CatalogBrowserRoot,
            UiSurface,
            Interaction::default(),
            Name::new("CatalogPanel"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                width: Val::Px(240.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(8.0),
                overflow: Overflow::clip_y(),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Title"),
                Text::new("Catalog"),
                TextFont { font_size: 18.0, ..default() },
                TextColor(TEXT_PRIMARY),
            ));

            parent.spawn((
                CategoryList,
                PanelTag(PanelId::CategoryBrowser),
                Name::new("CategoryList"),
                Node {
                    width: Val::Percent(100.0),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(6.0),
                    ..default()
                },
            ));

            parent
                .spawn((
                    PanelTag(PanelId::ItemBrowser),
                    Name::new("ItemBrowser"),
                    Node {
                        width: Val::Percent(100.0),
                        display: Display::None,
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(6.0),
                        ..default()
                    },
                ))
                .with_children(|browser| {
                    browser.spawn((
                        ItemList,
                        Name::new("ItemList"),
                        Node {
                            width: Val::Percent(100.0),
                            display: Display::Flex,
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(6.0),
                            ..default()
                        },
                    ));
                    spawn_labeled_button(browser, "Back", BUTTON_IDLE, BackToCategoriesButton);
                });

            parent.spawn((
                StatusLabel,
                Name::new("Status"),
                Text::new(""),
                TextFont { font_size: 13.0, ..default() },
                TextColor(TEXT_MUTED),
            ));
        });
}

pub fn populate_category_list(commands: &mut Commands, list: Entity, categories: &[String]) {
    commands.entity(list).with_children(|parent| {
        for name in categories {
            spawn_labeled_button(parent, name, BUTTON_IDLE, CategoryButton(name.clone()));
        }
    });
}

// Replaces the item buttons; previews are shown when the item has one
pub fn rebuild_item_list(
    commands: &mut Commands,
    asset_server: &AssetServer,
    list: Entity,
    items: &[CatalogItemRef],
) {
    commands.entity(list).despawn_related::<Children>();
    commands.entity(list).with_children(|parent| {
        for (index, item) in items.iter().enumerate() {
            let Some(preview) = item.preview.as_ref() else {
                spawn_labeled_button(parent, &item.name, BUTTON_IDLE, ItemButton(index));
                continue;
            };
            parent
                .spawn((
                    ItemButton(index),
                    Button,
                    UiSurface,
                    Name::new(format!("{}Button", item.name)),
                    BackgroundColor(BUTTON_IDLE),
                    BorderColor(BUTTON_BORDER),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(56.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(8.0),
                        padding: UiRect::all(Val::Px(4.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        ImageNode::new(asset_server.load(preview.clone())),
                        Node {
                            width: Val::Px(48.0),
                            height: Val::Px(48.0),
                            ..default()
                        },
                    ));
                    btn.spawn((
                        Text::new(item.name.clone()),
                        TextFont { font_size: 15.0, ..default() },
                        TextColor(TEXT_PRIMARY),
                    ));
                });
        }
    });
}
