use std::collections::{HashMap, HashSet};

use bevy::ecs::world::World;
use bevy::prelude::*;
use mr_object_editor::engine::assets::catalog::{AssetCatalog, CatalogError, CatalogItemRef};
use mr_object_editor::engine::assets::catalog_manifest::CatalogManifest;
use mr_object_editor::engine::input::SampledPointer;
use mr_object_editor::engine::pose::{Bounds, world_bounds};
use mr_object_editor::engine::runtime::{
    EntityInfo, PanelHost, PanelId, SceneRuntime, UiHit, WorldHit,
};
use mr_object_editor::tools::context_menu::MenuPanel;

pub const CATALOG_JSON: &str = r#"{
    "categories": [
        {
            "name": "Chairs",
            "items": [
                { "name": "Chair01" },
                { "name": "Chair02", "shape": "cylinder" },
                { "name": "Stool", "size": [0.4, 0.7, 0.4] }
            ],
            "previews": ["chairs/chair01.png", "chairs/chair02.png"]
        },
        {
            "name": "Lamps",
            "items": [
                { "name": "Lamp01", "shape": "cylinder", "size": [0.3, 1.5, 0.3] }
            ]
        }
    ]
}"#;

pub fn catalog() -> CatalogManifest {
    serde_json::from_str(CATALOG_JSON).expect("test catalog parses")
}

pub struct FakeEntity {
    pub transform: Transform,
    pub info: EntityInfo,
    pub local_bounds: Option<Bounds>,
    pub color: Option<Color>,
    pub spawned_from: Option<CatalogItemRef>,
}

/// In-memory scene. A private `World` only hands out entity ids.
pub struct FakeScene {
    ids: World,
    pub entities: HashMap<Entity, FakeEntity>,
    pub viewer: Option<Vec3>,
    pub spawn_count: usize,
    pub transform_writes: usize,
}

impl Default for FakeScene {
    fn default() -> Self {
        Self {
            ids: World::new(),
            entities: HashMap::new(),
            viewer: Some(Vec3::new(0.0, 1.6, 5.0)),
            spawn_count: 0,
            transform_writes: 0,
        }
    }
}

impl FakeScene {
    fn insert(&mut self, info: EntityInfo, transform: Transform, local_bounds: Option<Bounds>) -> Entity {
        let entity = self.ids.spawn_empty().id();
        self.entities.insert(
            entity,
            FakeEntity {
                transform,
                info,
                local_bounds,
                color: None,
                spawned_from: None,
            },
        );
        entity
    }

    pub fn add_floor(&mut self) -> Entity {
        self.insert(
            EntityInfo {
                name: "Floor".into(),
                ar_plane: true,
                renderable: true,
                ..default()
            },
            Transform::IDENTITY,
            Some(Bounds::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 10.0))),
        )
    }

    pub fn add_object(&mut self, name: &str, at: Vec3) -> Entity {
        self.insert(
            EntityInfo {
                name: name.into(),
                renderable: true,
                ..default()
            },
            Transform::from_translation(at),
            Some(Bounds::new(Vec3::new(0.0, 0.5, 0.0), Vec3::splat(0.5))),
        )
    }

    pub fn add_ui_element(&mut self) -> Entity {
        self.insert(
            EntityInfo {
                name: "Button".into(),
                ui: true,
                renderable: true,
                ..default()
            },
            Transform::IDENTITY,
            None,
        )
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(&entity)
    }
}

impl SceneRuntime for FakeScene {
    fn spawn(&mut self, item: &CatalogItemRef, position: Vec3, rotation: Quat) -> Entity {
        self.spawn_count += 1;
        let entity = self.insert(
            EntityInfo {
                name: item.name.clone(),
                renderable: true,
                ..default()
            },
            Transform::from_translation(position).with_rotation(rotation),
            Some(Bounds::new(Vec3::new(0.0, 0.25, 0.0), Vec3::splat(0.25))),
        );
        if let Some(e) = self.entities.get_mut(&entity) {
            e.spawned_from = Some(item.clone());
        }
        entity
    }

    fn destroy(&mut self, entity: Entity) {
        self.entities.remove(&entity);
    }

    fn transform(&self, entity: Entity) -> Option<Transform> {
        self.entities.get(&entity).map(|e| e.transform)
    }

    fn set_transform(&mut self, entity: Entity, transform: Transform) {
        if let Some(e) = self.entities.get_mut(&entity) {
            self.transform_writes += 1;
            e.transform = transform;
        }
    }

    fn bounds(&self, entity: Entity) -> Option<Bounds> {
        let e = self.entities.get(&entity)?;
        e.local_bounds.map(|b| world_bounds(&e.transform, b))
    }

    fn describe(&self, entity: Entity) -> Option<EntityInfo> {
        self.entities.get(&entity).map(|e| e.info.clone())
    }

    fn set_color(&mut self, entity: Entity, color: Color) {
        if let Some(e) = self.entities.get_mut(&entity) {
            e.color = Some(color);
        }
    }

    fn viewer_position(&self) -> Option<Vec3> {
        self.viewer
    }
}

/// Records visibility and the last world pose per panel.
#[derive(Default)]
pub struct FakePanels {
    pub visible: HashSet<PanelId>,
    pub poses: HashMap<PanelId, (Vec3, Quat)>,
}

impl FakePanels {
    pub fn visible_menu_panels(&self) -> Vec<MenuPanel> {
        MenuPanel::ALL
            .into_iter()
            .filter(|p| self.visible.contains(&PanelId::Menu(*p)))
            .collect()
    }
}

impl PanelHost for FakePanels {
    fn show(&mut self, panel: PanelId) {
        self.visible.insert(panel);
    }

    fn hide(&mut self, panel: PanelId) {
        self.visible.remove(&panel);
    }

    fn set_world_pose(&mut self, panel: PanelId, position: Vec3, rotation: Quat) {
        self.poses.insert(panel, (position, rotation));
    }
}

pub fn pointer_at(entity: Entity, point: Vec3, normal: Vec3) -> SampledPointer {
    SampledPointer {
        ui: None,
        world: Some(WorldHit {
            point,
            normal,
            entity,
            distance: point.length(),
        }),
    }
}

pub fn pointer_over_ui(element: Entity) -> SampledPointer {
    SampledPointer {
        ui: Some(UiHit { element }),
        world: None,
    }
}

/// Catalog that fails every lookup, for the unloaded-manifest path.
pub struct EmptyCatalog;

impl AssetCatalog for EmptyCatalog {
    fn list_categories(&self) -> Vec<String> {
        Vec::new()
    }

    fn load_category(&self, _: &str) -> Result<Vec<CatalogItemRef>, CatalogError> {
        Err(CatalogError::ManifestNotLoaded)
    }
}
