use bevy::prelude::*;

use super::ObjectEditor;
use super::interactions::CatalogBrowserEvent;
use super::ui::{CategoryList, ItemList, StatusLabel, populate_category_list, rebuild_item_list};
use crate::engine::assets::catalog::AssetCatalog;
use crate::engine::assets::catalog_manifest::{
    CatalogManifest, CatalogReadyEvent, LoadedCatalog, ManifestLoader,
};
use crate::engine::input::FrameSample;
use crate::engine::scene_bridge::{EcsScene, PlacedFrom};
use crate::tools::context_menu::interactions::MenuButtonEvent;
use crate::tools::context_menu::panels::UiPanels;

/// Advances the editor by one frame against the live world.
pub fn run_object_editor(
    sample: Res<FrameSample>,
    mut menu_events: EventReader<MenuButtonEvent>,
    mut editor: ResMut<ObjectEditor>,
    mut scene: EcsScene,
    mut panels: UiPanels,
) {
    let mut input = sample.input.clone();
    input.menu_buttons = menu_events.read().map(|e| e.0).collect();

    let outcome = editor.tick(&input, &sample.pointers, &mut scene, &mut panels);
    if outcome.over_ui && (input.select || input.place) {
        trace!("Press consumed by UI");
    }
}

// Fill the category list once the manifest is available
pub fn populate_categories_on_ready(
    mut commands: Commands,
    mut ready: EventReader<CatalogReadyEvent>,
    loader: Res<ManifestLoader>,
    manifests: Res<Assets<CatalogManifest>>,
    lists: Query<Entity, With<CategoryList>>,
) {
    if ready.read().last().is_none() {
        return;
    }
    let Ok(list) = lists.single() else {
        return;
    };

    let categories = LoadedCatalog(loader.manifest(&manifests)).list_categories();
    if categories.is_empty() {
        warn!("Catalog manifest has no categories");
    }
    populate_category_list(&mut commands, list, &categories);
}

pub fn handle_catalog_browser_events(
    mut commands: Commands,
    mut events: EventReader<CatalogBrowserEvent>,
    mut editor: ResMut<ObjectEditor>,
    mut panels: UiPanels,
    loader: Res<ManifestLoader>,
    manifests: Res<Assets<CatalogManifest>>,
    asset_server: Res<AssetServer>,
    item_lists: Query<Entity, With<ItemList>>,
) {
    for event in events.read() {
        match event {
            CatalogBrowserEvent::OpenCategory(category) => {
                let catalog = LoadedCatalog(loader.manifest(&manifests));
                let items = editor
                    .open_category(category, &catalog, &mut panels)
                    .map(<[_]>::to_vec)
                    .unwrap_or_default();
                if let Ok(list) = item_lists.single() {
                    rebuild_item_list(&mut commands, &asset_server, list, &items);
                }
            }
            CatalogBrowserEvent::ChooseItem(index) => match editor.choose_item(*index) {
                Ok(item) => debug!("Chose {} for placement", item.name),
                Err(e) => warn!("Item choice rejected: {}", e),
            },
            CatalogBrowserEvent::ReturnToCategories => editor.return_to_categories(&mut panels),
        }
    }
}

/// Display name of a scene entity: its catalog item, then its `Name`, then its id.
fn entity_label(entity: Entity, placed: Option<&PlacedFrom>, name: Option<&Name>) -> String {
    match (placed, name) {
        (Some(PlacedFrom(item)), _) => item.name.clone(),
        (None, Some(name)) => name.as_str().to_string(),
        (None, None) => entity.to_string(),
    }
}

fn status_line(editor: &ObjectEditor, labels: &Query<(Option<&PlacedFrom>, Option<&Name>)>) -> String {
    let chosen = editor
        .selection
        .chosen_item()
        .map(|item| item.name.as_str())
        .unwrap_or("none");
    let selected = editor
        .selection
        .selected_entity()
        .map(|e| match labels.get(e) {
            Ok((placed, name)) => entity_label(e, placed, name),
            Err(_) => e.to_string(),
        })
        .unwrap_or_else(|| "none".to_string());

    format!(
        "Placing: {chosen}\nSelected: {selected}\nMode: {} (Tab)",
        editor.mode.mode().as_str()
    )
}

pub fn reflect_status_label(
    editor: Res<ObjectEditor>,
    entity_labels: Query<(Option<&PlacedFrom>, Option<&Name>)>,
    mut labels: Query<&mut Text, With<StatusLabel>>,
) {
    let line = status_line(&editor, &entity_labels);
    for mut text in &mut labels {
        if text.0 != line {
            text.0 = line.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::engine::assets::catalog::{CatalogItem, ItemTemplate};
    use bevy::ecs::world::World;

    #[test]
    fn placed_instances_are_labelled_by_catalog_item() {
        let e = World::new().spawn_empty().id();
        let placed = PlacedFrom(Arc::new(CatalogItem {
            name: "Lamp01".into(),
            template: ItemTemplate::default(),
            preview: None,
        }));
        let name = Name::new("Renamed");

        assert_eq!(entity_label(e, Some(&placed), Some(&name)), "Lamp01");
        assert_eq!(entity_label(e, None, Some(&name)), "Renamed");
        assert_eq!(entity_label(e, None, None), e.to_string());
    }
}
