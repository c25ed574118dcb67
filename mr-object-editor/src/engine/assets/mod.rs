//! Catalog data: item templates and the JSON manifest they are loaded from.

/// Catalog item types and the `AssetCatalog` seam.
pub mod catalog;

/// JSON manifest asset, its loader resource and readiness event.
///
/// Also carries optional editor settings that override the built-in defaults.
pub mod catalog_manifest;
