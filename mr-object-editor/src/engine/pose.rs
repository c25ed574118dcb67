//! Pose helpers shared by placement, manipulation and the contextual menu.
//!
//! Everything here is a pure function of its inputs. World "up" is +Y.

use bevy::math::{Mat3, Quat, Vec3};
use bevy::prelude::Transform;
use std::f32::consts::PI;

/// Axis-aligned box described by its centre and half-size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Vec3,
    pub extents: Vec3,
}

impl Bounds {
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self { center, extents }
    }

    /// Cube of the given edge length around `center`.
    pub fn cube(center: Vec3, size: f32) -> Self {
        Self {
            center,
            extents: Vec3::splat(size * 0.5),
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }
}

/// Rotation taking local +Y onto the surface normal.
///
/// A zero or non-finite normal leaves the instance unrotated.
pub fn surface_aligned_rotation(normal: Vec3) -> Quat {
    match normal.try_normalize() {
        Some(n) => Quat::from_rotation_arc(Vec3::Y, n),
        None => Quat::IDENTITY,
    }
}

/// Applies a yaw of `degrees` around world up, after the existing rotation.
pub fn yaw_world(rotation: Quat, degrees: f32) -> Quat {
    (Quat::from_rotation_y(degrees.to_radians()) * rotation).normalize()
}

/// Adds `delta` to every scale component, flooring each at `min`.
pub fn offset_scale_clamped(scale: Vec3, delta: f32, min: f32) -> Vec3 {
    (scale + Vec3::splat(delta)).max(Vec3::splat(min))
}

/// Multiplies the scale by `factor`, flooring each component at `min`.
pub fn multiply_scale_clamped(scale: Vec3, factor: f32, min: f32) -> Vec3 {
    (scale * factor).max(Vec3::splat(min))
}

/// World-space AABB of a local box after applying `transform`.
pub fn world_bounds(transform: &Transform, local: Bounds) -> Bounds {
    let linear = Mat3::from_quat(transform.rotation) * Mat3::from_diagonal(transform.scale);
    let abs = Mat3::from_cols(
        linear.x_axis.abs(),
        linear.y_axis.abs(),
        linear.z_axis.abs(),
    );
    Bounds {
        center: transform.transform_point(local.center),
        extents: abs * local.extents,
    }
}

/// Point above the bounds where the contextual menu floats.
pub fn menu_anchor(bounds: Bounds, height_offset: f32) -> Vec3 {
    bounds.center + Vec3::Y * (bounds.extents.y + height_offset)
}

/// Orientation for a panel at `panel` so its front face is presented to `viewer`.
///
/// Looks at the viewer, then turns half a revolution about the panel's own up axis.
pub fn viewer_facing_rotation(panel: Vec3, viewer: Vec3) -> Quat {
    let look = Transform::from_translation(panel).looking_at(viewer, Vec3::Y);
    look.rotation * Quat::from_rotation_y(PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn surface_rotation_maps_up_onto_normal() {
        for normal in [Vec3::Y, Vec3::X, Vec3::NEG_Z, Vec3::new(1.0, 1.0, 0.0).normalize()] {
            let q = surface_aligned_rotation(normal);
            assert!(approx(q * Vec3::Y, normal), "normal {normal:?} got {:?}", q * Vec3::Y);
        }
    }

    #[test]
    fn surface_rotation_handles_ceiling_and_degenerate_normals() {
        let q = surface_aligned_rotation(Vec3::NEG_Y);
        assert!(approx(q * Vec3::Y, Vec3::NEG_Y));
        assert_eq!(surface_aligned_rotation(Vec3::ZERO), Quat::IDENTITY);
        assert_eq!(surface_aligned_rotation(Vec3::splat(f32::NAN)), Quat::IDENTITY);
    }

    #[test]
    fn floor_normal_is_identity() {
        let q = surface_aligned_rotation(Vec3::Y);
        assert!(q.angle_between(Quat::IDENTITY) < 1e-5);
    }

    #[test]
    fn yaw_turns_about_world_up_regardless_of_tilt() {
        let tilted = Quat::from_rotation_x(0.5);
        let turned = yaw_world(tilted, 90.0);
        // World up is unaffected by a world-space yaw.
        let before = tilted * Vec3::Y;
        let after = turned * Vec3::Y;
        assert!((before.y - after.y).abs() < 1e-5);
        assert!(approx(turned * Vec3::X, Quat::from_rotation_y(PI / 2.0) * (tilted * Vec3::X)));
    }

    #[test]
    fn scale_floor_holds() {
        let s = offset_scale_clamped(Vec3::new(0.15, 1.0, 2.0), -0.5, 0.1);
        assert_eq!(s, Vec3::new(0.1, 0.5, 1.5));
        let m = multiply_scale_clamped(Vec3::splat(0.11), 0.8, 0.1);
        assert_eq!(m, Vec3::splat(0.1));
    }

    #[test]
    fn world_bounds_follow_rotation_and_scale() {
        let local = Bounds::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(1.0, 0.5, 0.25));
        let transform = Transform::from_xyz(2.0, 0.0, 0.0)
            .with_rotation(Quat::from_rotation_y(PI / 2.0))
            .with_scale(Vec3::splat(2.0));
        let world = world_bounds(&transform, local);
        assert!(approx(world.center, Vec3::new(2.0, 1.0, 0.0)));
        assert!(approx(world.extents, Vec3::new(0.5, 1.0, 2.0)));
    }

    #[test]
    fn menu_floats_above_top_face() {
        let bounds = Bounds::new(Vec3::new(1.0, 0.5, 2.0), Vec3::new(0.3, 0.5, 0.3));
        assert!(approx(menu_anchor(bounds, 1.5), Vec3::new(1.0, 2.5, 2.0)));
    }

    #[test]
    fn panel_front_faces_viewer() {
        let panel = Vec3::new(0.0, 2.0, 0.0);
        let viewer = Vec3::new(0.0, 2.0, 5.0);
        let q = viewer_facing_rotation(panel, viewer);
        // Panel +Z (front of a Rectangle mesh) points toward the viewer.
        assert!(approx(q * Vec3::Z, Vec3::Z));
        assert!(approx(q * Vec3::Y, Vec3::Y));
    }
}
