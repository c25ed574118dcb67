use bevy::prelude::*;

use constants::palette::{BUTTON_HOVERED, BUTTON_IDLE, BUTTON_PRESSED};

#[derive(Component, Debug, Clone)]
pub struct CategoryButton(pub String);

#[derive(Component, Debug, Clone, Copy)]
pub struct ItemButton(pub usize);

#[derive(Component)]
pub struct BackToCategoriesButton;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum CatalogBrowserEvent {
    OpenCategory(String),
    ChooseItem(usize),
    ReturnToCategories,
}

fn tint(interaction: Interaction) -> BackgroundColor {
    BackgroundColor(match interaction {
        Interaction::Pressed => BUTTON_PRESSED,
        Interaction::Hovered => BUTTON_HOVERED,
        Interaction::None => BUTTON_IDLE,
    })
}

// Category buttons open the item list for their category
pub fn category_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor, &CategoryButton), (Changed<Interaction>, With<Button>)>,
    mut events: EventWriter<CatalogBrowserEvent>,
) {
    for (interaction, mut bg, CategoryButton(name)) in &mut q {
        if *interaction == Interaction::Pressed {
            events.write(CatalogBrowserEvent::OpenCategory(name.clone()));
        }
        *bg = tint(*interaction);
    }
}

// Item buttons choose the item for placement
pub fn item_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor, &ItemButton), (Changed<Interaction>, With<Button>)>,
    mut events: EventWriter<CatalogBrowserEvent>,
) {
    for (interaction, mut bg, ItemButton(index)) in &mut q {
        if *interaction == Interaction::Pressed {
            events.write(CatalogBrowserEvent::ChooseItem(*index));
        }
        *bg = tint(*interaction);
    }
}

pub fn back_to_categories_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<BackToCategoriesButton>)>,
    mut events: EventWriter<CatalogBrowserEvent>,
) {
    for (interaction, mut bg) in &mut q {
        if *interaction == Interaction::Pressed {
            events.write(CatalogBrowserEvent::ReturnToCategories);
        }
        *bg = tint(*interaction);
    }
}
