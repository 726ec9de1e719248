//! Equirectangular (longitude/latitude) texture coordinates.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

/// Texture coordinate of a point on a sphere of the given radius.
///
/// `u = atan2(z, x) / 2π + 0.5` wraps once around the Y axis and jumps from 1
/// back to 0 on the `-X` meridian. `v = asin(y / radius) / π + 0.5` runs from
/// 0 at the south pole to 1 at the north pole.
pub fn equirectangular_uv(position: Vec3, radius: f32) -> Vec2 {
    let u = position.z.atan2(position.x) / TAU + 0.5;
    // Rounding can put a pole vertex a hair outside the sphere.
    let v = (position.y / radius).clamp(-1.0, 1.0).asin() / PI + 0.5;
    Vec2::new(u, v)
}

/// Texture coordinates for every position.
pub fn map_uvs(positions: &[Vec3], radius: f32) -> Vec<Vec2> {
    positions
        .iter()
        .map(|&p| equirectangular_uv(p, radius))
        .collect()
}

/// Replace every `v` with `1 - v` so that `v = 0` is the top of the texture.
pub fn flip_v(uvs: &mut [Vec2]) {
    for uv in uvs {
        uv.y = 1.0 - uv.y;
    }
}
