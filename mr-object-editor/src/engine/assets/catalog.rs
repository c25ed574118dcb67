use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primitive a template is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateShape {
    #[default]
    Cuboid,
    Sphere,
    Cylinder,
}

/// Instantiable description of a placeable item. The core never inspects it, it only hands
/// it back to `SceneRuntime::spawn`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    #[serde(default)]
    pub shape: TemplateShape,
    #[serde(default = "default_size")]
    pub size: [f32; 3],
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

fn default_size() -> [f32; 3] {
    constants::catalog::DEFAULT_TEMPLATE_SIZE
}

fn default_color() -> [f32; 3] {
    constants::catalog::DEFAULT_TEMPLATE_COLOR
}

impl Default for ItemTemplate {
    fn default() -> Self {
        Self {
            shape: TemplateShape::default(),
            size: default_size(),
            color: default_color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub name: String,
    pub template: ItemTemplate,
    /// Asset path of the preview image, when one exists.
    pub preview: Option<String>,
}

/// Items are shared, never copied, once a category is loaded.
pub type CatalogItemRef = Arc<CatalogItem>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("catalog manifest has not finished loading")]
    ManifestNotLoaded,
}

pub trait AssetCatalog {
    fn list_categories(&self) -> Vec<String>;

    /// Items of one category in display order. Previews are index aligned with items and may
    /// be missing for trailing items.
    fn load_category(&self, name: &str) -> Result<Vec<CatalogItemRef>, CatalogError>;
}
