//! Seams between the interaction core and whatever hosts it.
//!
//! ```text
//! Pointer (per device, per frame)      ──> hit_resolver::resolve
//! SceneRuntime (spawn / destroy / pose) <── placement, manipulation, menu actions
//! PanelHost (show / hide / world pose)  <── context_menu, catalog browser
//! ```
//!
//! The Bevy implementations live in `engine::scene_bridge`, `engine::input` and
//! `tools::context_menu::panels`; tests drive the same core with in-memory fakes.

use bevy::math::{Quat, Vec3};
use bevy::prelude::{Color, Entity, Transform};

use crate::engine::assets::catalog::CatalogItemRef;
use crate::engine::pose::Bounds;
use crate::tools::context_menu::MenuPanel;

/// A ray that struck a scene surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub entity: Entity,
    pub distance: f32,
}

/// A ray that struck a UI surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiHit {
    pub element: Entity,
}

/// One pointing device. Casts reflect the device's ray for the current frame.
pub trait Pointer {
    fn cast_ui(&self) -> Option<UiHit>;
    fn cast_world(&self) -> Option<WorldHit>;
}

/// What the core needs to know about an entity before selecting it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityInfo {
    pub name: String,
    /// Tagged as part of the UI.
    pub ui: bool,
    /// Carries an AR plane marker.
    pub ar_plane: bool,
    /// Has something visible to render.
    pub renderable: bool,
}

impl EntityInfo {
    pub fn is_selectable(&self) -> bool {
        !self.ui && !self.ar_plane && self.renderable
    }
}

pub trait SceneRuntime {
    /// Instantiates the item's template at the given pose and returns the new entity.
    fn spawn(&mut self, item: &CatalogItemRef, position: Vec3, rotation: Quat) -> Entity;
    fn destroy(&mut self, entity: Entity);
    fn transform(&self, entity: Entity) -> Option<Transform>;
    fn set_transform(&mut self, entity: Entity, transform: Transform);
    /// World-space bounds, if the entity has any.
    fn bounds(&self, entity: Entity) -> Option<Bounds>;
    fn describe(&self, entity: Entity) -> Option<EntityInfo>;
    fn set_color(&mut self, entity: Entity, color: Color);
    fn viewer_position(&self) -> Option<Vec3>;
}

/// Named UI surfaces the core can show, hide or anchor in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    /// Container of the contextual menu; visible whenever any menu panel is.
    ContextMenu,
    Menu(MenuPanel),
    CategoryBrowser,
    ItemBrowser,
}

pub trait PanelHost {
    fn show(&mut self, panel: PanelId);
    fn hide(&mut self, panel: PanelId);
    fn set_world_pose(&mut self, panel: PanelId, position: Vec3, rotation: Quat);
}
