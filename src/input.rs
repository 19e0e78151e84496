//! Pure pointer math shared by the picker and the event glue.

use glam::{Vec2, Vec3};

/// Latest pointer state in normalized device coordinates.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub ndc: Vec2,
    pub down: bool,
}

/// Convert client-space pixel coordinates to NDC ([-1,1], +y up), clamped
/// so coordinates reported outside the surface never produce rays from
/// beyond the frustum edge.
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let nx = (2.0 * x / width.max(1.0)) - 1.0;
    let ny = 1.0 - (2.0 * y / height.max(1.0));
    Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

/// Map a wheel event's vertical delta to a navigation step. Purely
/// horizontal events (`delta_y == 0`) carry no vertical intent and map
/// to no step at all.
#[inline]
pub fn wheel_direction(delta_y: f64) -> Option<i32> {
    if delta_y == 0.0 {
        None
    } else if delta_y > 0.0 {
        Some(1)
    } else {
        Some(-1)
    }
}

/// Ray-sphere intersection; returns the nearest non-negative hit distance.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
