//! The regular icosahedron every icosphere is refined from.

use glam::Vec3;

/// Number of vertices of the base icosahedron.
pub const BASE_VERTEX_COUNT: usize = 12;

/// Number of triangles of the base icosahedron.
pub const BASE_TRIANGLE_COUNT: usize = 20;

/// Triangles of the base icosahedron, counter-clockwise when viewed from outside.
pub const BASE_TRIANGLES: [[u32; 3]; BASE_TRIANGLE_COUNT] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [11, 10, 2],
    [5, 11, 4],
    [1, 5, 9],
    [7, 1, 8],
    [10, 7, 6],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [9, 8, 1],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
];

/// Corner positions of a regular icosahedron centered at the origin.
///
/// The corners are the cyclic permutations of `(0, ±1, ±φ)` where φ is the
/// golden ratio. They are not normalized; every corner sits at distance
/// `sqrt(1 + φ²)` from the origin and every edge has length 2.
pub fn base_positions() -> [Vec3; BASE_VERTEX_COUNT] {
    let f = (1.0 + 5.0_f32.sqrt()) / 2.0;

    [
        Vec3::new(-1.0, f, 0.0),
        Vec3::new(1.0, f, 0.0),
        Vec3::new(-1.0, -f, 0.0),
        Vec3::new(1.0, -f, 0.0),
        Vec3::new(0.0, -1.0, f),
        Vec3::new(0.0, 1.0, f),
        Vec3::new(0.0, -1.0, -f),
        Vec3::new(0.0, 1.0, -f),
        Vec3::new(f, 0.0, -1.0),
        Vec3::new(f, 0.0, 1.0),
        Vec3::new(-f, 0.0, -1.0),
        Vec3::new(-f, 0.0, 1.0),
    ]
}
