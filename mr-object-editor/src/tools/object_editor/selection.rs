use bevy::prelude::*;
use thiserror::Error;

use crate::engine::assets::catalog::CatalogItemRef;
use crate::engine::runtime::{EntityInfo, SceneRuntime};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("catalog index {index} is out of range for {len} items")]
    InvalidIndex { index: usize, len: usize },
    #[error("entity {0} is not selectable")]
    IneligibleTarget(Entity),
}

/// Pending catalog choice plus the in-scene manipulation target.
///
/// The two halves are independent: choosing an item never touches the scene selection and
/// selecting an instance never touches the catalog choice.
#[derive(Debug, Default)]
pub struct SelectionState {
    items: Vec<CatalogItemRef>,
    index: Option<usize>,
    chosen: Option<CatalogItemRef>,
    selected: Option<Entity>,
}

impl SelectionState {
    /// Adopt `items` as the open category and choose the item at `index`.
    ///
    /// The list is always adopted. An out-of-range index leaves the previous choice in place.
    pub fn select_catalog_item(
        &mut self,
        index: usize,
        items: Vec<CatalogItemRef>,
    ) -> Result<&CatalogItemRef, SelectionError> {
        self.items = items;

        let Some(item) = self.items.get(index).cloned() else {
            warn!("Invalid catalog index {} selected from category", index);
            return Err(SelectionError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        };

        info!("Selected catalog item: {}", item.name);
        self.index = Some(index);
        Ok(&*self.chosen.insert(item))
    }

    /// Make `entity` the manipulation target if it is eligible. Re-selecting the current target
    /// is a no-op.
    pub fn select_world_entity(
        &mut self,
        entity: Entity,
        info: &EntityInfo,
    ) -> Result<(), SelectionError> {
        if !info.is_selectable() {
            debug!("Hit ignored: {} is UI or an AR plane", info.name);
            return Err(SelectionError::IneligibleTarget(entity));
        }
        if self.selected != Some(entity) {
            info!("Selected: {}", info.name);
            self.selected = Some(entity);
        }
        Ok(())
    }

    /// Drop the catalog choice, the open category and the scene selection.
    pub fn clear(&mut self) {
        self.items.clear();
        self.index = None;
        self.chosen = None;
        self.selected = None;
    }

    /// Destroy the selected instance and forget it. The catalog choice survives.
    pub fn delete_selected<S: SceneRuntime>(&mut self, scene: &mut S) -> Option<Entity> {
        let entity = self.selected.take()?;
        scene.destroy(entity);
        info!("Deleted selected instance {}", entity);
        Some(entity)
    }

    /// Forget `entity` if it is the scene selection, after it was destroyed elsewhere.
    pub fn forget(&mut self, entity: Entity) {
        if self.selected == Some(entity) {
            self.selected = None;
        }
    }

    pub fn chosen_item(&self) -> Option<&CatalogItemRef> {
        self.chosen.as_ref()
    }

    pub fn chosen_index(&self) -> Option<usize> {
        self.index
    }

    pub fn items(&self) -> &[CatalogItemRef] {
        &self.items
    }

    pub fn selected_entity(&self) -> Option<Entity> {
        self.selected
    }
}
