//! Fixed-topology primitive solids.

use bezel_math::{Point2, Point3};
use serde::{Deserialize, Serialize};

use crate::tessellate::Tessellate;

/// Axis-aligned cuboid centered on the origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cuboid {
    half_extent: f64,
}

/// Corner signs; index order is shared by the edge and face tables.
const CORNERS: [[f64; 3]; 8] = [
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const EDGES: [[u32; 2]; 12] = [
    [0, 1],
    [0, 3],
    [0, 4],
    [2, 1],
    [2, 3],
    [2, 7],
    [6, 3],
    [6, 4],
    [6, 7],
    [5, 1],
    [5, 4],
    [5, 7],
];

/// Quad faces ordered so the accumulated face normal points outward;
/// each splits into the triangles `(a, b, c)` and `(a, c, d)`.
const QUADS: [[u32; 4]; 6] = [
    [0, 1, 2, 3],
    [3, 2, 7, 6],
    [6, 7, 5, 4],
    [4, 5, 1, 0],
    [1, 5, 7, 2],
    [4, 0, 3, 6],
];

impl Cuboid {
    pub fn new(half_extent: f64) -> Self {
        Self { half_extent }
    }

    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }
}

impl Default for Cuboid {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Tessellate for Cuboid {
    fn vertices(&self) -> Vec<Point3> {
        CORNERS
            .iter()
            .map(|c| Point3::from_array(*c) * self.half_extent)
            .collect()
    }

    fn edges(&self) -> Vec<[u32; 2]> {
        EDGES.to_vec()
    }

    fn faces(&self) -> Vec<[u32; 3]> {
        QUADS
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
            .collect()
    }

    fn texture_coordinates(&self) -> Vec<Point2> {
        CORNERS
            .iter()
            .map(|c| Point2::new((c[0] + 1.0) * 0.5, (c[1] + 1.0) * 0.5))
            .collect()
    }
}
