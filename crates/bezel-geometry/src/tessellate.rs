//! Tessellation: converting parametric objects into discrete geometry.

use bezel_math::{Point2, Point3};

use crate::curve::Curve;

/// Capability interface for objects that can produce a discrete mesh.
///
/// Every method computes its buffer from the object's current state; the
/// index lists refer to positions in the vertex list returned by the same
/// object.
pub trait Tessellate: Send + Sync {
    /// Tessellated vertex positions in local space.
    fn vertices(&self) -> Vec<Point3>;

    /// Wireframe edges as vertex index pairs.
    fn edges(&self) -> Vec<[u32; 2]>;

    /// Triangles as vertex index triples. Empty for wireframe-only
    /// objects such as curves.
    fn faces(&self) -> Vec<[u32; 3]>;

    /// One texture coordinate per vertex.
    fn texture_coordinates(&self) -> Vec<Point2>;
}

/// Sample a curve at `segments + 1` evenly spaced parameters across its
/// domain.
pub fn sample_uniform(curve: &dyn Curve, segments: usize) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    let step = (t_max - t_min) / segments as f64;
    (0..=segments)
        .map(|k| curve.point_at(t_min + step * k as f64))
        .collect()
}

/// Sequential open-polyline edges `(k, k+1)` for a curve sampled at
/// `segments + 1` vertices.
pub fn polyline_edges(segments: usize) -> Vec<[u32; 2]> {
    (0..segments as u32).map(|k| [k, k + 1]).collect()
}
