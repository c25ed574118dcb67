//! `SceneRuntime` over the Bevy world.
//!
//! Placed instances are plain PBR meshes built from their catalog template. Anything that can
//! be struck by a pointer carries `LocalBounds`; the pointer sampler in `engine::input` tests
//! rays against those boxes.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::engine::assets::catalog::{CatalogItem, CatalogItemRef, TemplateShape};
use crate::engine::pose::{Bounds, world_bounds};
use crate::engine::runtime::{EntityInfo, SceneRuntime};

/// Hit-test box in the entity's local space.
#[derive(Component, Debug, Clone, Copy)]
pub struct LocalBounds(pub Bounds);

/// Detected (or simulated) real-world surface. Valid for placement, never selectable.
#[derive(Component)]
pub struct ArPlane;

/// Part of the UI.
#[derive(Component)]
pub struct UiSurface;

/// Back-reference from a placed entity to the catalog item it came from.
#[derive(Component)]
pub struct PlacedFrom(pub CatalogItemRef);

#[derive(SystemParam)]
pub struct EcsScene<'w, 's> {
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    transforms: Query<'w, 's, &'static mut Transform, Without<Camera3d>>,
    infos: Query<
        'w,
        's,
        (
            Option<&'static Name>,
            Has<UiSurface>,
            Has<ArPlane>,
            Has<Mesh3d>,
            Option<&'static LocalBounds>,
            Option<&'static MeshMaterial3d<StandardMaterial>>,
        ),
    >,
    cameras: Query<'w, 's, &'static GlobalTransform, With<Camera3d>>,
}

/// Mesh with its origin on the bottom face, and the matching local box.
pub fn template_mesh(item: &CatalogItem) -> (Mesh, Bounds) {
    let size = Vec3::from_array(item.template.size).max(Vec3::splat(0.001));
    let mesh = match item.template.shape {
        TemplateShape::Cuboid => Mesh::from(Cuboid::from_size(size)),
        TemplateShape::Sphere => Mesh::from(Sphere::new(size.max_element() * 0.5)),
        TemplateShape::Cylinder => Mesh::from(Cylinder::new(size.x.max(size.z) * 0.5, size.y)),
    };
    let extents = match item.template.shape {
        TemplateShape::Cuboid => size * 0.5,
        TemplateShape::Sphere => Vec3::splat(size.max_element() * 0.5),
        TemplateShape::Cylinder => Vec3::new(size.x.max(size.z) * 0.5, size.y * 0.5, size.x.max(size.z) * 0.5),
    };
    let lift = Vec3::Y * extents.y;
    (mesh.translated_by(lift), Bounds::new(lift, extents))
}

impl SceneRuntime for EcsScene<'_, '_> {
    fn spawn(&mut self, item: &CatalogItemRef, position: Vec3, rotation: Quat) -> Entity {
        let (mesh, local) = template_mesh(item);
        let [r, g, b] = item.template.color;
        let material = self.materials.add(StandardMaterial {
            base_color: Color::srgb(r, g, b),
            perceptual_roughness: 0.8,
            ..default()
        });

        self.commands
            .spawn((
                Mesh3d(self.meshes.add(mesh)),
                MeshMaterial3d(material),
                Transform::from_translation(position).with_rotation(rotation),
                LocalBounds(local),
                PlacedFrom(item.clone()),
                Name::new(item.name.clone()),
            ))
            .id()
    }

    fn destroy(&mut self, entity: Entity) {
        if let Ok(mut e) = self.commands.get_entity(entity) {
            e.despawn();
        }
    }

    fn transform(&self, entity: Entity) -> Option<Transform> {
        self.transforms.get(entity).ok().copied()
    }

    fn set_transform(&mut self, entity: Entity, transform: Transform) {
        if let Ok(mut t) = self.transforms.get_mut(entity) {
            *t = transform;
        }
    }

    fn bounds(&self, entity: Entity) -> Option<Bounds> {
        let transform = self.transforms.get(entity).ok()?;
        let (_, _, _, _, local, _) = self.infos.get(entity).ok()?;
        local.map(|LocalBounds(b)| world_bounds(transform, *b))
    }

    fn describe(&self, entity: Entity) -> Option<EntityInfo> {
        let (name, ui, ar_plane, mesh, _, _) = self.infos.get(entity).ok()?;
        Some(EntityInfo {
            name: name.map(|n| n.as_str().to_string()).unwrap_or_else(|| entity.to_string()),
            ui,
            ar_plane,
            renderable: mesh,
        })
    }

    fn set_color(&mut self, entity: Entity, color: Color) {
        let Ok((_, _, _, _, _, Some(handle))) = self.infos.get(entity) else {
            return;
        };
        if let Some(material) = self.materials.get_mut(&handle.0) {
            material.base_color = color;
        }
    }

    fn viewer_position(&self) -> Option<Vec3> {
        self.cameras.single().ok().map(|g| g.translation())
    }
}
