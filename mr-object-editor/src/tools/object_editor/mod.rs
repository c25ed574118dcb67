//! Object editor: catalog browsing, placement, selection, joystick manipulation and the
//! contextual menu, driven once per frame from sampled pointers and devices.
//!
//! ## Frame Flow
//!
//! ```text
//! sample_frame_input()            (engine::input)
//!   └─> FrameSample { pointers, input }
//!       └─> run_object_editor()
//!           └─> ObjectEditor::tick()
//!               ├─> resolve pointers (UI consumes the frame)
//!               ├─> toggle edit mode
//!               ├─> menu button presses
//!               ├─> select / place / delete
//!               ├─> joystick manipulation of the selection
//!               └─> re-anchor the contextual menu
//!       └─> project_world_anchors()
//! ```
//!
//! The editor core never touches the ECS directly. It talks to the world through
//! `SceneRuntime` and to the UI through `PanelHost`, so every rule can be exercised with
//! in-memory fakes.

/// Category and item browsing over an `AssetCatalog`.
pub mod catalog_browser;

/// The `ObjectEditor` resource and its per-frame `tick`.
pub mod editor;

/// Catalog panel buttons and the events they raise.
pub mod interactions;

/// Continuous joystick edits of the selected instance.
pub mod manipulation;

/// Spawning the chosen catalog item on a surface hit.
pub mod placement;

/// Ray against oriented box intersection for pointer picking.
///
/// Slab method in entity-local space, normal returned in world space.
pub mod ray;

/// Catalog item choice and world selection.
pub mod selection;

/// Settings, per-frame input and tick outcome types.
pub mod state;

/// Bevy systems wiring the editor to the world and the UI.
pub mod systems;

/// Catalog side panel spawning and list rebuilding.
pub mod ui;

use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

pub use editor::ObjectEditor;
pub use state::EditorSettings;

use crate::engine::assets::catalog_manifest::{
    CatalogManifest, CatalogReadyEvent, ManifestLoader, start_loading, watch_manifest,
};
use crate::engine::input::{FrameSample, sample_frame_input};
use crate::tools::context_menu::interactions::{MenuButtonEvent, menu_button_interaction};
use crate::tools::context_menu::panels::project_world_anchors;
use crate::tools::context_menu::ui::spawn_context_menu_ui;
use interactions::{
    CatalogBrowserEvent, back_to_categories_interaction, category_button_interaction,
    item_button_interaction,
};
use systems::{
    handle_catalog_browser_events, populate_categories_on_ready, reflect_status_label,
    run_object_editor,
};
use ui::spawn_catalog_browser_ui;

// Registers the editor resource, catalog manifest loading, UI panels and per-frame systems.
pub struct ObjectEditorPlugin;

impl Plugin for ObjectEditorPlugin {
    fn build(&self, app: &mut App) {
        app
            // Registers CatalogManifest as a loadable asset type from JSON files.
            .add_plugins(JsonAssetPlugin::<CatalogManifest>::new(&["json"]))
            .init_resource::<ObjectEditor>()
            .init_resource::<FrameSample>()
            .init_resource::<ManifestLoader>()
            .add_event::<MenuButtonEvent>()
            .add_event::<CatalogBrowserEvent>()
            .add_event::<CatalogReadyEvent>()
            .add_systems(
                Startup,
                (start_loading, spawn_context_menu_ui, spawn_catalog_browser_ui),
            )
            .add_systems(
                Update,
                (
                    // Catalog
                    watch_manifest,
                    populate_categories_on_ready,
                    category_button_interaction,
                    item_button_interaction,
                    back_to_categories_interaction,
                    handle_catalog_browser_events,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    // World
                    menu_button_interaction,
                    sample_frame_input,
                    run_object_editor,
                    project_world_anchors,
                    reflect_status_label,
                )
                    .chain()
                    .after(handle_catalog_browser_events),
            );
    }
}
