use bevy::prelude::*;

/// Distance along the ray and the outward normal of the face that was struck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayBoxHit {
    pub t: f32,
    pub normal: Vec3,
}

/// Ray against an oriented box given by `xf` and a box in the entity's local space.
/// The returned normal is in world space.
pub fn ray_hits_obb(
    origin: Vec3,
    dir: Vec3,
    xf: &GlobalTransform,
    local_min: Vec3,
    local_max: Vec3,
) -> Option<RayBoxHit> {
    let m = xf.compute_matrix();
    let inv = m.inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let hit = ray_aabb_hit(o_local, d_local, local_min, local_max)?;

    // Normals transform with the inverse transpose; t is unchanged since the direction was
    // mapped by the same matrix.
    let normal = inv.transpose().transform_vector3(hit.normal).normalize_or_zero();
    Some(RayBoxHit { t: hit.t, normal })
}

// Slab-method ray–AABB intersection with the entry face normal.
// Returns the exit face when the origin is inside the box.
pub fn ray_aabb_hit(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<RayBoxHit> {
    if dir.length_squared() == 0.0 {
        return None;
    }

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    let mut near_normal = Vec3::ZERO;
    let mut far_normal = Vec3::ZERO;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d == 0.0 {
            // Parallel to this slab: must already lie between its planes.
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let (t0, t1) = ((min[axis] - o) * inv, (max[axis] - o) * inv);
        let (t_enter, t_exit) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };

        let mut n = Vec3::ZERO;
        n[axis] = if d > 0.0 { -1.0 } else { 1.0 };

        if t_enter > t_near {
            t_near = t_enter;
            near_normal = n;
        }
        if t_exit < t_far {
            t_far = t_exit;
            far_normal = -n;
        }
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 {
        RayBoxHit { t: t_near, normal: near_normal }
    } else {
        RayBoxHit { t: t_far, normal: far_normal }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downward_ray_hits_top_face() {
        let hit = ray_aabb_hit(Vec3::new(0.2, 5.0, -0.1), Vec3::NEG_Y, Vec3::splat(-1.0), Vec3::splat(1.0))
            .expect("hit");
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn sideways_ray_hits_min_x_face() {
        let hit = ray_aabb_hit(Vec3::new(-3.0, 0.0, 0.0), Vec3::X, Vec3::splat(-1.0), Vec3::splat(1.0))
            .expect("hit");
        assert!((hit.t - 2.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::NEG_X);
    }

    #[test]
    fn misses_and_boxes_behind_the_origin() {
        let (min, max) = (Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(ray_aabb_hit(Vec3::new(0.0, 5.0, 0.0), Vec3::Y, min, max).is_none());
        assert!(ray_aabb_hit(Vec3::new(3.0, 5.0, 0.0), Vec3::NEG_Y, min, max).is_none());
        assert!(ray_aabb_hit(Vec3::ZERO, Vec3::ZERO, min, max).is_none());
    }

    #[test]
    fn origin_inside_reports_exit_face() {
        let hit = ray_aabb_hit(Vec3::ZERO, Vec3::Z, Vec3::splat(-1.0), Vec3::splat(1.0)).expect("hit");
        assert!((hit.t - 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn rotated_box_normal_is_in_world_space() {
        // Box turned 90° about Y; the face toward the origin is its local -X face.
        let xf = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, -5.0).with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        let hit = ray_hits_obb(Vec3::ZERO, Vec3::NEG_Z, &xf, Vec3::splat(-1.0), Vec3::splat(1.0))
            .expect("hit");
        assert!((hit.t - 4.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4, "normal {:?}", hit.normal);
    }

    #[test]
    fn scaled_floor_slab_reports_up_normal() {
        let xf = GlobalTransform::from(Transform::from_scale(Vec3::new(10.0, 1.0, 10.0)));
        let hit = ray_hits_obb(
            Vec3::new(3.0, 4.0, 2.0),
            Vec3::NEG_Y,
            &xf,
            Vec3::new(-0.5, -0.01, -0.5),
            Vec3::new(0.5, 0.0, 0.5),
        )
        .expect("hit");
        assert!((hit.t - 4.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::Y).length() < 1e-4);
    }
}
