//! Detection and repair of triangles that straddle the `u = 0 / u = 1` seam.
//!
//! Equirectangular `u` jumps from 1 back to 0 on the `-X` meridian. A triangle
//! with corners on both sides of that meridian interpolates across almost the
//! whole texture. Regular triangles of the sphere come out clockwise in the
//! `(u, v)` plane (negative [`texture_winding`]); a wrapping triangle is
//! mirrored by the jump and comes out counter-clockwise.
//!
//! Repair redirects the low-side corners of every wrapping triangle to copies
//! of those vertices whose `u` is shifted by one, so the triangle samples
//! `[threshold, 1 + threshold)` instead. Copies are shared between wrapping
//! triangles; neighbours that do not wrap keep the original vertices.

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::buffers::SphereBuffers;

/// Default seam threshold: any corner in the low half of texture space,
/// including the `u = 0.5` meridian, is moved across the seam.
pub const DEFAULT_SEAM_THRESHOLD: f32 = 0.5;

/// Narrow seam threshold that only moves corners at most 0.05 from the seam.
///
/// Misses wrapping triangles whose low-side corners sit further from the seam,
/// which happens at low orders and near the poles.
pub const NARROW_SEAM_THRESHOLD: f32 = 0.05;

/// Largest accepted threshold: the last `f32` below 1.
pub const MAX_SEAM_THRESHOLD: f32 = 1.0 - f32::EPSILON / 2.0;

/// Z component of `(b - a) × (c - a)` for three points in the texture plane.
///
/// Positive for corners that run counter-clockwise in `(u, v)`.
pub fn texture_winding(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// Seam detection and repair settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamRepair {
    threshold: f32,
}

impl Default for SeamRepair {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SEAM_THRESHOLD,
        }
    }
}

impl SeamRepair {
    /// Create repair settings with the given `u` threshold, clamped to
    /// `[0, MAX_SEAM_THRESHOLD]`.
    ///
    /// Shifted copies have `u >= 1`, so a threshold below 1 never selects them
    /// again.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, MAX_SEAM_THRESHOLD),
        }
    }

    /// Corners with `u` at or below this value are moved across the seam.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a triangle with these corner coordinates wraps around the seam.
    pub fn is_wrapping(&self, corners: [Vec2; 3]) -> bool {
        let [a, b, c] = corners;
        texture_winding(a, b, c) > 0.0 && corners.iter().any(|uv| uv.x <= self.threshold)
    }

    /// Repair every wrapping triangle in place and return how many vertices
    /// were duplicated.
    ///
    /// Must run before the V flip, which mirrors the texture plane and with it
    /// the sign of [`texture_winding`]. Buffers without texture coordinates are
    /// left alone. Running it again on repaired buffers duplicates nothing.
    pub fn apply(&self, buffers: &mut SphereBuffers) -> usize {
        let SphereBuffers {
            positions,
            normals,
            uvs,
            triangles,
        } = buffers;
        let Some(uvs) = uvs.as_mut() else {
            return 0;
        };

        let mut shifted: FxHashMap<u32, u32> = FxHashMap::default();

        for triangle in triangles.iter_mut() {
            let corners = triangle.map(|i| uvs[i as usize]);
            if !self.is_wrapping(corners) {
                continue;
            }

            for (slot, uv) in triangle.iter_mut().zip(corners) {
                if uv.x > self.threshold {
                    continue;
                }
                let original = *slot;
                *slot = *shifted.entry(original).or_insert_with(|| {
                    let copy = positions.len() as u32;
                    positions.push(positions[original as usize]);
                    normals.push(normals[original as usize]);
                    uvs.push(Vec2::new(uv.x + 1.0, uv.y));
                    copy
                });
            }
        }

        shifted.len()
    }
}
