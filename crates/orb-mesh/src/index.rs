//! Index buffers sized to the vertex count they address.

use std::slice;

/// Storage width of an index buffer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexWidth {
    U16,
    U32,
}

impl IndexWidth {
    /// Narrowest width able to address `vertex_count` vertices (largest index
    /// `vertex_count - 1`).
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count <= u16::MAX as usize + 1 {
            Self::U16
        } else {
            Self::U32
        }
    }

    /// Size of one index in bytes.
    pub fn bytes(self) -> usize {
        match self {
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}

/// Triangle-list indices stored at 16 or 32 bits per element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    U16(Box<[u16]>),
    U32(Box<[u32]>),
}

impl IndexBuffer {
    /// Flatten `triangles` into a buffer of the narrowest width that can
    /// address `vertex_count` vertices.
    ///
    /// Every index must be below `vertex_count`; this is checked in debug builds.
    pub fn from_triangles(triangles: &[[u32; 3]], vertex_count: usize) -> Self {
        let flat = triangles.as_flattened();
        debug_assert!(
            flat.iter().all(|&i| (i as usize) < vertex_count),
            "index out of range for {vertex_count} vertices"
        );
        match IndexWidth::for_vertex_count(vertex_count) {
            IndexWidth::U16 => Self::U16(flat.iter().map(|&i| i as u16).collect()),
            IndexWidth::U32 => Self::U32(flat.into()),
        }
    }

    /// Element width of this buffer.
    pub fn width(&self) -> IndexWidth {
        match self {
            Self::U16(_) => IndexWidth::U16,
            Self::U32(_) => IndexWidth::U32,
        }
    }

    /// Number of indices (three per triangle).
    pub fn len(&self) -> usize {
        match self {
            Self::U16(data) => data.len(),
            Self::U32(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index at position `i`, widened to `u32`.
    pub fn get(&self, i: usize) -> Option<u32> {
        match self {
            Self::U16(data) => data.get(i).map(|&v| u32::from(v)),
            Self::U32(data) => data.get(i).copied(),
        }
    }

    /// Iterate over all indices widened to `u32`.
    pub fn iter(&self) -> Indices<'_> {
        match self {
            Self::U16(data) => Indices::U16(data.iter()),
            Self::U32(data) => Indices::U32(data.iter()),
        }
    }

    /// Raw bytes for upload to a GPU index buffer.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::U16(data) => bytemuck::cast_slice(data),
            Self::U32(data) => bytemuck::cast_slice(data),
        }
    }
}

/// Iterator over the indices of an [`IndexBuffer`], see [`IndexBuffer::iter`].
#[derive(Debug, Clone)]
pub enum Indices<'a> {
    U16(slice::Iter<'a, u16>),
    U32(slice::Iter<'a, u32>),
}

impl Iterator for Indices<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match self {
            Self::U16(iter) => iter.next().map(|&v| u32::from(v)),
            Self::U32(iter) => iter.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::U16(iter) => iter.size_hint(),
            Self::U32(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Indices<'_> {}
