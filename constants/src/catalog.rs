/// Catalog manifest, relative to the asset root.
pub const CATALOG_MANIFEST_PATH: &str = "catalog/catalog.json";

/// Folder holding per-category preview images.
pub const PREVIEW_ROOT: &str = "catalog/previews";

/// Size used for templates whose manifest entry omits one.
pub const DEFAULT_TEMPLATE_SIZE: [f32; 3] = [0.5, 0.5, 0.5];

/// Base colour used for templates whose manifest entry omits one.
pub const DEFAULT_TEMPLATE_COLOR: [f32; 3] = [0.8, 0.8, 0.8];
