use bezel_core::traits::{BoundingBox, Validate};
use bezel_core::{BezelError, Result};
use bezel_geometry::Tessellate;
use bezel_math::{Aabb3, Point2, Point3, Vector3};

use crate::normal;

/// Renderer-ready mesh: positions, wireframe edges, triangle indices, and
/// per-vertex attributes.
#[derive(Debug, Clone, Default)]
pub struct PolyMesh {
    pub positions: Vec<Point3>,
    pub edges: Vec<[u32; 2]>,
    /// Flat triangle index list, three entries per face.
    pub indices: Vec<u32>,
    /// Accumulated per-vertex normals, unnormalized (see `bezel-mesh::normal`).
    pub normals: Vec<Vector3>,
    pub uvs: Vec<Point2>,
}

impl PolyMesh {
    /// Tessellate an object and derive its per-vertex attributes.
    pub fn from_object(object: &dyn Tessellate) -> Self {
        let positions = object.vertices();
        let indices: Vec<u32> = object.faces().into_iter().flatten().collect();
        let normals = normal::vertex_normals(&positions, &indices);
        Self {
            positions,
            edges: object.edges(),
            indices,
            normals,
            uvs: object.texture_coordinates(),
        }
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of wireframe edges in the mesh.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Merge another mesh into this one, offsetting its indices.
    pub fn merge(&mut self, other: &PolyMesh) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.edges
            .extend(other.edges.iter().map(|&[a, b]| [a + offset, b + offset]));
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Recompute the accumulated per-vertex normals from the current
    /// positions and triangles.
    pub fn recompute_normals(&mut self) {
        self.normals = normal::vertex_normals(&self.positions, &self.indices);
    }
}

impl Validate for PolyMesh {
    /// A mesh is malformed when an edge or triangle references a vertex
    /// at or past the vertex count, when the triangle list is not a
    /// multiple of three, or when a per-vertex attribute list disagrees
    /// with the vertex count.
    fn validate(&self) -> Result<()> {
        let n = self.positions.len() as u32;
        if self.indices.len() % 3 != 0 {
            return Err(BezelError::InvalidArgument(format!(
                "triangle index list length {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if let Some(&i) = self.indices.iter().find(|&&i| i >= n) {
            return Err(BezelError::InvalidArgument(format!(
                "triangle index {} out of bounds for {} vertices",
                i, n
            )));
        }
        if let Some(&i) = self.edges.iter().flatten().find(|&&i| i >= n) {
            return Err(BezelError::InvalidArgument(format!(
                "edge index {} out of bounds for {} vertices",
                i, n
            )));
        }
        if self.normals.len() != self.positions.len() {
            return Err(BezelError::InvalidArgument(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                self.positions.len()
            )));
        }
        if self.uvs.len() != self.positions.len() {
            return Err(BezelError::InvalidArgument(format!(
                "{} texture coordinates for {} vertices",
                self.uvs.len(),
                self.positions.len()
            )));
        }
        Ok(())
    }
}

impl BoundingBox for PolyMesh {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let bb = Aabb3::from_points(&self.positions)
            .unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO));
        (bb.min, bb.max)
    }
}
