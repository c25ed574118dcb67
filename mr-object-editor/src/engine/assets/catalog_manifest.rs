use std::sync::Arc;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::catalog::{AssetCatalog, CatalogError, CatalogItem, CatalogItemRef, ItemTemplate};
use crate::tools::object_editor::ObjectEditor;
use crate::tools::object_editor::state::EditorSettings;
use constants::catalog::{CATALOG_MANIFEST_PATH, PREVIEW_ROOT};

/// One placeable entry inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    #[serde(flatten)]
    pub template: ItemTemplate,
}

/// Items and preview images of one category, index aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub items: Vec<ItemEntry>,
    /// Preview image paths relative to the preview root. May be shorter than `items`.
    #[serde(default)]
    pub previews: Vec<String>,
}

/// Catalog manifest as a Bevy asset. Mirrors the JSON file exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct CatalogManifest {
    pub categories: Vec<CategoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<EditorSettings>,
}

impl CatalogManifest {
    pub fn category(&self, name: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|c| c.name == name)
    }
}

impl AssetCatalog for CatalogManifest {
    fn list_categories(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    fn load_category(&self, name: &str) -> Result<Vec<CatalogItemRef>, CatalogError> {
        let category = self
            .category(name)
            .ok_or_else(|| CatalogError::UnknownCategory(name.to_string()))?;

        let items = category
            .items
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Arc::new(CatalogItem {
                    name: entry.name.clone(),
                    template: entry.template.clone(),
                    preview: category
                        .previews
                        .get(i)
                        .map(|p| format!("{PREVIEW_ROOT}/{p}")),
                })
            })
            .collect::<Vec<_>>();

        info!(
            "Loaded {} items and {} previews for {}",
            items.len(),
            category.previews.len().min(items.len()),
            name
        );
        Ok(items)
    }
}

/// Catalog view over a manifest that may still be loading.
pub struct LoadedCatalog<'a>(pub Option<&'a CatalogManifest>);

impl AssetCatalog for LoadedCatalog<'_> {
    fn list_categories(&self) -> Vec<String> {
        self.0.map(|m| m.list_categories()).unwrap_or_default()
    }

    fn load_category(&self, name: &str) -> Result<Vec<CatalogItemRef>, CatalogError> {
        self.0
            .ok_or(CatalogError::ManifestNotLoaded)?
            .load_category(name)
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    pub handle: Option<Handle<CatalogManifest>>,
    loaded: bool,
}

impl ManifestLoader {
    pub fn manifest<'a>(&self, manifests: &'a Assets<CatalogManifest>) -> Option<&'a CatalogManifest> {
        self.handle.as_ref().and_then(|h| manifests.get(h))
    }
}

/// Fired once, when the manifest becomes available.
#[derive(Event)]
pub struct CatalogReadyEvent;

pub fn start_loading(mut loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading catalog manifest from: {}", CATALOG_MANIFEST_PATH);
    loader.handle = Some(asset_server.load(CATALOG_MANIFEST_PATH));
}

// Apply manifest settings and announce the catalog once it has loaded
pub fn watch_manifest(
    mut loader: ResMut<ManifestLoader>,
    manifests: Res<Assets<CatalogManifest>>,
    mut editor: ResMut<ObjectEditor>,
    mut ready: EventWriter<CatalogReadyEvent>,
) {
    if loader.loaded {
        return;
    }
    let Some(manifest) = loader.manifest(&manifests) else {
        return;
    };

    if let Some(settings) = manifest.settings.clone() {
        info!("Applying editor settings from catalog manifest");
        editor.apply_settings(settings);
    }
    info!(
        "Catalog manifest ready: {} categories",
        manifest.categories.len()
    );
    loader.loaded = true;
    ready.write(CatalogReadyEvent);
}
