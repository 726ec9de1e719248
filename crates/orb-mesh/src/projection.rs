//! Projection of subdivided vertices onto a sphere.

use glam::Vec3;

/// Push every position out (or in) to distance `radius` from the origin and
/// return the matching unit normals.
///
/// Directions are preserved; `normal[i] == positions[i] / radius`. No position
/// may be at the origin, which cannot happen for a subdivided icosahedron.
pub fn project_to_sphere(positions: &mut [Vec3], radius: f32) -> Vec<Vec3> {
    positions
        .iter_mut()
        .map(|p| {
            *p *= radius / p.length();
            *p / radius
        })
        .collect()
}
