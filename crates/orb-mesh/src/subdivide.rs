//! Edge-midpoint subdivision with midpoint deduplication.
//!
//! Every pass splits each triangle into four by inserting a vertex at the
//! midpoint of each edge. An edge is shared by exactly two triangles of a
//! closed mesh, so its midpoint is created by the first triangle that asks for
//! it and handed to the second one, which also retires the cache entry.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::error::MeshError;

/// Highest subdivision order accepted by the generator.
///
/// Order 10 already yields 10 485 762 vertices.
pub const MAX_ORDER: u32 = 10;

/// Reject orders above [`MAX_ORDER`].
pub fn validate_order(order: u32) -> Result<(), MeshError> {
    if order > MAX_ORDER {
        return Err(MeshError::InvalidOrder {
            order,
            max: MAX_ORDER,
        });
    }
    Ok(())
}

/// Vertex count of an icosphere after `order` subdivision passes: `10·4^order + 2`.
///
/// # Panics
///
/// Panics if `order > MAX_ORDER`.
pub const fn vertex_count(order: u32) -> usize {
    assert!(order <= MAX_ORDER, "subdivision order exceeds MAX_ORDER");
    10 * (1 << (2 * order)) + 2
}

/// Triangle count of an icosphere after `order` subdivision passes: `20·4^order`.
///
/// # Panics
///
/// Panics if `order > MAX_ORDER`.
pub const fn triangle_count(order: u32) -> usize {
    assert!(order <= MAX_ORDER, "subdivision order exceeds MAX_ORDER");
    20 * (1 << (2 * order))
}

/// Order-independent key for the edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey(u32, u32);

impl EdgeKey {
    /// Build the key for the edge `a`–`b`. `EdgeKey::new(a, b) == EdgeKey::new(b, a)`.
    pub fn new(a: u32, b: u32) -> Self {
        if a < b { Self(a, b) } else { Self(b, a) }
    }
}

/// Midpoints that have been created by one triangle and not yet claimed by the
/// triangle on the other side of the edge.
///
/// A cache lives for a single subdivision pass; vertex indices of one pass are
/// never looked up in another.
#[derive(Debug, Default)]
pub struct MidpointCache {
    pending: FxHashMap<EdgeKey, u32>,
}

impl MidpointCache {
    /// Create a cache sized for a pass over a mesh with `edges` edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            pending: FxHashMap::with_capacity_and_hasher(edges, Default::default()),
        }
    }

    /// Return the index of the midpoint vertex of edge `a`–`b`.
    ///
    /// The first request appends the mean of the two endpoints to `positions`
    /// and remembers it; the second request returns the same index and removes
    /// the entry.
    pub fn midpoint(&mut self, positions: &mut Vec<Vec3>, a: u32, b: u32) -> u32 {
        let key = EdgeKey::new(a, b);
        if let Some(index) = self.pending.remove(&key) {
            return index;
        }

        let index = positions.len() as u32;
        let mid = (positions[a as usize] + positions[b as usize]) * 0.5;
        positions.push(mid);
        self.pending.insert(key, index);
        index
    }

    /// Number of midpoints still waiting for their second triangle.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Run one subdivision pass, appending midpoint vertices to `positions`.
///
/// Triangle `(v1, v2, v3)` becomes `(v1, a, c)`, `(v2, b, a)`, `(v3, c, b)`,
/// `(a, b, c)` with `a = mid(v1, v2)`, `b = mid(v2, v3)`, `c = mid(v3, v1)`.
/// The children keep the winding of their parent.
pub fn subdivide_once(positions: &mut Vec<Vec3>, triangles: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let mut cache = MidpointCache::with_capacity(triangles.len() * 3 / 2);
    let mut refined = Vec::with_capacity(triangles.len() * 4);

    for &[v1, v2, v3] in triangles {
        let a = cache.midpoint(positions, v1, v2);
        let b = cache.midpoint(positions, v2, v3);
        let c = cache.midpoint(positions, v3, v1);

        refined.extend_from_slice(&[[v1, a, c], [v2, b, a], [v3, c, b], [a, b, c]]);
    }

    if cache.pending() != 0 {
        tracing::debug!(
            "subdivision left {} boundary edges unmatched",
            cache.pending()
        );
    }

    refined
}
