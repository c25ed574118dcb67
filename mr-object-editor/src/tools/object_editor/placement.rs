use bevy::prelude::*;
use thiserror::Error;

use crate::engine::assets::catalog::CatalogItemRef;
use crate::engine::pose::surface_aligned_rotation;
use crate::engine::runtime::SceneRuntime;
use crate::tools::hit_resolver::Resolution;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("pointer is over UI")]
    PointerOverUI,
    #[error("no catalog item selected")]
    NoItemSelected,
    #[error("no valid surface to place on")]
    NoSurfaceHit,
}

/// A freshly spawned instance and the pose it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedInstance {
    pub entity: Entity,
    pub item: CatalogItemRef,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Spawn one instance of `chosen` on the resolved surface, with its up axis along the surface
/// normal. Preconditions are checked in order: UI, item, surface.
pub fn place<S: SceneRuntime>(
    resolution: &Resolution,
    chosen: Option<&CatalogItemRef>,
    scene: &mut S,
) -> Result<PlacedInstance, PlacementError> {
    if resolution.over_ui {
        debug!("Pointer is over UI, skipping placement");
        return Err(PlacementError::PointerOverUI);
    }
    let Some(item) = chosen else {
        warn!("No catalog item selected");
        return Err(PlacementError::NoItemSelected);
    };
    let Some(hit) = resolution.hit else {
        warn!("No valid surface to place {}", item.name);
        return Err(PlacementError::NoSurfaceHit);
    };

    let rotation = surface_aligned_rotation(hit.normal);
    let entity = scene.spawn(item, hit.point, rotation);
    info!("Placed {} at {:?}", item.name, hit.point);

    Ok(PlacedInstance {
        entity,
        item: item.clone(),
        position: hit.point,
        rotation,
    })
}
