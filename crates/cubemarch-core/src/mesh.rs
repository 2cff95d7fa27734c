//! Triangle soup and assembled meshes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{CubeMarchError, Result};

/// A single output triangle; triangles share no vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Corner positions in table winding order.
    pub vertices: [Vec3; 3],
}

impl Triangle {
    /// Creates a triangle from three corner positions.
    #[must_use]
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the unit face normal, or zero for a degenerate triangle.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (c - b).cross(a - b).normalize_or_zero()
    }

    /// Returns the centroid of the triangle.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Computes the bounds of a point set, or `None` if it is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<Self> {
        points.into_iter().fold(None, |acc, &p| match acc {
            None => Some(Self { min: p, max: p }),
            Some(b) => Some(Self {
                min: b.min.min(p),
                max: b.max.max(p),
            }),
        })
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the edge lengths of the box.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns true if `p` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Consumer of assembled meshes, such as a renderer's upload path.
pub trait MeshSink {
    /// Receives the flat vertex buffer and its index buffer.
    fn upload(&mut self, vertices: &[Vec3], indices: &[u32]);
}

/// GPU-compatible vertex layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// Flat face normal.
    pub normal: [f32; 3],
}

/// Flat-shaded triangle mesh produced by one extraction pass.
///
/// Every triangle owns three consecutive vertices and the index buffer is the
/// identity `0..3N`. Normals are per face, repeated on each corner. Indices
/// are `u32`, so a mesh holds at most `u32::MAX` vertices; assembling a larger
/// soup fails with [`CubeMarchError::TooManyVertices`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, three per triangle in encounter order.
    pub vertices: Vec<Vec3>,
    /// Per-vertex normals (each equal to its triangle's face normal).
    pub normals: Vec<Vec3>,
    /// Triangle indices (every 3 consecutive indices form a triangle).
    pub indices: Vec<u32>,
    /// Bounds of all vertices, `None` when the mesh is empty.
    pub bounds: Option<Aabb>,
}

impl Mesh {
    /// Assembles a mesh from a triangle list.
    pub fn from_triangles(triangles: &[Triangle]) -> Result<Self> {
        let mut mesh = Self::default();
        mesh.assemble_into(triangles)?;
        Ok(mesh)
    }

    /// Rebuilds this mesh from `triangles`, replacing any previous contents.
    ///
    /// On error the mesh is left unchanged.
    pub fn assemble_into(&mut self, triangles: &[Triangle]) -> Result<()> {
        let end = index_end(triangles.len())?;
        let num_vertices = end as usize;

        self.vertices.clear();
        self.normals.clear();
        self.indices.clear();
        self.vertices.reserve(num_vertices);
        self.normals.reserve(num_vertices);
        self.indices.reserve(num_vertices);

        for tri in triangles {
            let n = tri.normal();
            self.vertices.extend_from_slice(&tri.vertices);
            self.normals.extend_from_slice(&[n, n, n]);
        }
        self.indices.extend(0..end);
        self.bounds = Aabb::from_points(&self.vertices);
        Ok(())
    }

    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over the mesh triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|v| Triangle::new(v[0], v[1], v[2]))
    }

    /// Hands the vertex and index buffers to `sink`.
    pub fn submit(&self, sink: &mut impl MeshSink) {
        sink.upload(&self.vertices, &self.indices);
    }

    /// Interleaves positions and normals for upload.
    #[must_use]
    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| GpuVertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }

    /// Returns the interleaved vertex buffer as raw bytes.
    #[must_use]
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.gpu_vertices()).to_vec()
    }
}

/// One past the last index of a soup of `num_triangles` triangles.
fn index_end(num_triangles: usize) -> Result<u32> {
    let too_many = |count| CubeMarchError::TooManyVertices { count };
    let count = num_triangles
        .checked_mul(3)
        .ok_or_else(|| too_many(usize::MAX))?;
    u32::try_from(count).map_err(|_| too_many(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        vertices: Vec<Vec3>,
        indices: Vec<u32>,
        uploads: usize,
    }

    impl MeshSink for RecordingSink {
        fn upload(&mut self, vertices: &[Vec3], indices: &[u32]) {
            self.vertices = vertices.to_vec();
            self.indices = indices.to_vec();
            self.uploads += 1;
        }
    }

    fn two_triangles() -> Vec<Triangle> {
        vec![
            Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y),
            Triangle::new(Vec3::ZERO, Vec3::Z, Vec3::X),
        ]
    }

    #[test]
    fn test_identity_indices() {
        let mesh = Mesh::from_triangles(&two_triangles()).unwrap();
        assert_eq!(mesh.num_triangles(), 2);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.vertices[3], Vec3::ZERO);
        assert_eq!(mesh.vertices[4], Vec3::Z);
    }

    #[test]
    fn test_flat_normals() {
        let mesh = Mesh::from_triangles(&two_triangles()).unwrap();
        let n0 = two_triangles()[0].normal();
        assert!((n0.length() - 1.0).abs() < 1e-6);
        assert!(n0.abs().abs_diff_eq(Vec3::Z, 1e-6));
        assert_eq!(&mesh.normals[0..3], &[n0, n0, n0]);
        let n1 = two_triangles()[1].normal();
        assert_eq!(&mesh.normals[3..6], &[n1, n1, n1]);
    }

    #[test]
    fn test_degenerate_normal_is_zero() {
        let tri = Triangle::new(Vec3::ONE, Vec3::ONE, Vec3::ONE);
        assert_eq!(tri.normal(), Vec3::ZERO);
    }

    #[test]
    fn test_bounds() {
        let mesh = Mesh::from_triangles(&two_triangles()).unwrap();
        let bounds = mesh.bounds.unwrap();
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::ONE);
        assert!(bounds.contains(Vec3::splat(0.5)));
        assert_eq!(Mesh::from_triangles(&[]).unwrap().bounds, None);
    }

    #[test]
    fn test_assemble_overwrites() {
        let mut mesh = Mesh::from_triangles(&two_triangles()).unwrap();
        mesh.assemble_into(&two_triangles()[..1]).unwrap();
        assert_eq!(mesh.num_triangles(), 1);
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.normals.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);

        mesh.assemble_into(&[]).unwrap();
        assert!(mesh.is_empty());
        assert!(mesh.bounds.is_none());
    }

    #[test]
    fn test_index_range_limit() {
        let max_triangles = u32::MAX as usize / 3;
        assert_eq!(index_end(0).unwrap(), 0);
        assert_eq!(index_end(2).unwrap(), 6);
        assert_eq!(index_end(max_triangles).unwrap(), 3 * max_triangles as u32);
        assert!(matches!(
            index_end(max_triangles + 1),
            Err(CubeMarchError::TooManyVertices { count }) if count == 3 * (max_triangles + 1)
        ));
        assert!(matches!(
            index_end(usize::MAX),
            Err(CubeMarchError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn test_submit_to_sink() {
        let mesh = Mesh::from_triangles(&two_triangles()).unwrap();
        let mut sink = RecordingSink::default();
        mesh.submit(&mut sink);
        assert_eq!(sink.uploads, 1);
        assert_eq!(sink.vertices, mesh.vertices);
        assert_eq!(sink.indices, mesh.indices);
    }

    #[test]
    fn test_gpu_vertex_bytes() {
        let mesh = Mesh::from_triangles(&two_triangles()).unwrap();
        let gpu = mesh.gpu_vertices();
        assert_eq!(gpu.len(), 6);
        assert_eq!(gpu[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertex_bytes().len(), 6 * std::mem::size_of::<GpuVertex>());
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24);
    }

    #[test]
    fn test_triangles_round_trip() {
        let tris = two_triangles();
        let mesh = Mesh::from_triangles(&tris).unwrap();
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), tris);
    }
}
