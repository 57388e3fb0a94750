//! Per-vertex normal derivation from face topology.

use bezel_core::{BezelError, Result, Tolerance};
use bezel_math::{Point3, Vector3};
use rayon::prelude::*;

/// Unit normal of a single triangle.
///
/// The normal is `cross(p2 - p0, p1 - p0)` normalized; the triangle
/// winding decides its sign. Fails with `DegenerateFace` when the edge
/// vectors are collinear.
pub fn face_normal(p0: Point3, p1: Point3, p2: Point3) -> Result<Vector3> {
    let n = (p2 - p0).cross(p1 - p0);
    let len = n.length();
    if Tolerance::default().is_zero(len) {
        return Err(BezelError::DegenerateFace(format!(
            "triangle ({}, {}, {}) has collinear edges",
            p0, p1, p2
        )));
    }
    Ok(n / len)
}

/// Accumulated per-vertex normals for an indexed triangle list.
///
/// Every face contributes its unit normal to each of its three vertices;
/// degenerate faces contribute nothing. The per-vertex sums are returned
/// unnormalized: callers that need unit normals normalize separately.
/// Summing unit normals weighs each incident face equally regardless of
/// its area.
pub fn vertex_normals(positions: &[Point3], indices: &[u32]) -> Vec<Vector3> {
    let face_normals: Vec<Vector3> = indices
        .par_chunks_exact(3)
        .map(|tri| {
            let p0 = positions[tri[0] as usize];
            let p1 = positions[tri[1] as usize];
            let p2 = positions[tri[2] as usize];
            face_normal(p0, p1, p2).unwrap_or(Vector3::ZERO)
        })
        .collect();

    let mut normals = vec![Vector3::ZERO; positions.len()];
    for (tri, n) in indices.chunks_exact(3).zip(&face_normals) {
        for &v in tri {
            normals[v as usize] += *n;
        }
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bezel_math::DVec3;

    #[test]
    fn test_flat_triangle_normal() {
        // With this vertex order the cross product points down the Z axis
        let n = face_normal(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert!((n - DVec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_normal_perpendicular_to_edges() {
        let (p0, p1, p2) = (
            DVec3::new(0.5, -1.0, 2.0),
            DVec3::new(3.0, 0.25, -1.0),
            DVec3::new(-2.0, 4.0, 0.0),
        );
        let n = face_normal(p0, p1, p2).unwrap();
        assert_relative_eq!(n.dot(p1 - p0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.dot(p2 - p0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_face_fails() {
        let err = face_normal(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(2.0, 2.0, 2.0),
        );
        assert!(matches!(err, Err(BezelError::DegenerateFace(_))));
    }

    #[test]
    fn test_single_triangle_accumulation() {
        let positions = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
        ];
        let normals = vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals.len(), 3);
        for n in &normals {
            assert!((*n - DVec3::new(0.0, 0.0, 1.0)).length() < 1e-12);
        }
    }

    #[test]
    fn test_shared_vertices_accumulate_unnormalized() {
        // Two coplanar triangles sharing an edge: the shared vertices
        // collect two unit normals, so the stored sum has length 2
        let positions = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
        ];
        let normals = vertex_normals(&positions, &[0, 1, 2, 2, 1, 3]);
        assert_relative_eq!(normals[0].length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normals[1].length(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(normals[2].length(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(normals[3].length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_face_contributes_nothing() {
        let positions = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
        ];
        let normals = vertex_normals(&positions, &[0, 1, 2]);
        for n in &normals {
            assert_eq!(*n, Vector3::ZERO);
        }
    }
}
