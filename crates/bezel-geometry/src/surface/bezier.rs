//! Lofted Bézier surfaces built from generating curves.

use bezel_core::{BezelError, Result};
use bezel_math::{Point2, Point3};
use serde::{Deserialize, Serialize};

use crate::curve::{BezierCurve, Curve};
use crate::tessellate::{self, Tessellate};

/// A surface lofted through an ordered set of generating Bézier curves.
///
/// Construction resamples every generating curve at evenly spaced
/// parameters, collecting one point per generating curve into the control
/// set of a "secondary" curve. The tessellated secondary curves form the
/// surface's vertex grid row by row; triangulation stitches consecutive
/// rows into quads split along a fixed diagonal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierSurface {
    curves: Vec<BezierCurve>,
    secondary: Vec<BezierCurve>,
    quality: usize,
    last: bool,
}

impl BezierSurface {
    /// Loft a surface through `curves`.
    ///
    /// A positive `count` fixes the number of secondary curves. With
    /// `count == 0` the grid is square: one secondary curve per generating
    /// curve, plus a closing row when `last` is set.
    ///
    /// Secondary curve `i` samples every generating curve at parameter
    /// `i / curves.len()`. The denominator is the generating-curve count,
    /// not `count - 1`, so the sampling reaches t = 1 only when `i` equals
    /// the curve count; the grid layout this produces is a compatibility
    /// commitment.
    pub fn new(
        curves: Vec<BezierCurve>,
        quality: usize,
        count: usize,
        last: bool,
    ) -> Result<Self> {
        if curves.len() < 2 {
            return Err(BezelError::InvalidArgument(format!(
                "a lofted surface needs at least 2 generating curves, got {}",
                curves.len()
            )));
        }
        if quality == 0 {
            return Err(BezelError::InvalidArgument(
                "tessellation quality must be at least 1".to_string(),
            ));
        }

        let rows = if count > 0 {
            count
        } else if last {
            curves.len() + 1
        } else {
            curves.len()
        };

        let denom = curves.len() as f64;
        let mut secondary = Vec::with_capacity(rows);
        for i in 0..rows {
            let points = curves
                .iter()
                .map(|c| c.point_at(i as f64 / denom))
                .collect();
            secondary.push(BezierCurve::from_points(points, quality)?);
        }

        Ok(Self {
            curves,
            secondary,
            quality,
            last,
        })
    }

    /// Square-grid loft with a closing secondary curve.
    pub fn loft(curves: Vec<BezierCurve>, quality: usize) -> Result<Self> {
        Self::new(curves, quality, 0, true)
    }

    pub fn generating_curves(&self) -> &[BezierCurve] {
        &self.curves
    }

    pub fn secondary_curves(&self) -> &[BezierCurve] {
        &self.secondary
    }

    pub fn quality(&self) -> usize {
        self.quality
    }

    /// Number of secondary curves, i.e. vertex grid rows.
    pub fn rows(&self) -> usize {
        self.secondary.len()
    }

    /// Re-target the tessellation resolution of the surface and of every
    /// secondary curve.
    pub fn set_quality(&mut self, quality: usize) -> Result<()> {
        for curve in &mut self.secondary {
            curve.set_quality(quality)?;
        }
        self.quality = quality;
        Ok(())
    }

    /// Vertex indices that anchor a quad: every index in
    /// `1..(rows-1)*(quality+1)` except the first column of each row,
    /// where a quad would wrap around the row seam.
    fn quad_anchors(&self) -> impl Iterator<Item = u32> + '_ {
        let stride = (self.quality + 1) as u32;
        let end = self.rows().saturating_sub(1) as u32 * stride;
        (1..end).filter(move |i| i % stride != 0)
    }
}

impl Tessellate for BezierSurface {
    fn vertices(&self) -> Vec<Point3> {
        let mut verts = Vec::with_capacity(self.rows() * (self.quality + 1));
        for curve in &self.secondary {
            verts.extend(tessellate::sample_uniform(curve, self.quality));
        }
        verts
    }

    fn edges(&self) -> Vec<[u32; 2]> {
        let q = self.quality as u32;
        let mut edges = Vec::new();
        for i in self.quad_anchors() {
            edges.push([i - 1, i]);
            edges.push([i, q + i + 1]);
            edges.push([i - 1, q + i + 1]);
        }
        edges
    }

    fn faces(&self) -> Vec<[u32; 3]> {
        let q = self.quality as u32;
        let mut faces = Vec::new();
        for i in self.quad_anchors() {
            // Quad corners are (i-1, i, q+i+1, q+i); the split and the
            // vertex order fix the outward-normal sign.
            faces.push([q + i + 1, q + i, i]);
            faces.push([q + i, i - 1, i]);
        }
        faces
    }

    fn texture_coordinates(&self) -> Vec<Point2> {
        let q = self.quality as f64;
        let rows = self.rows();
        let v_denom = rows.saturating_sub(1).max(1) as f64;
        let mut uvs = Vec::with_capacity(rows * (self.quality + 1));
        for r in 0..rows {
            let v = r as f64 / v_denom;
            for c in 0..=self.quality {
                uvs.push(Point2::new(c as f64 / q, v));
            }
        }
        uvs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezel_math::DVec3;

    fn line(y: f64, quality: usize) -> BezierCurve {
        BezierCurve::from_points(
            vec![
                DVec3::new(0.0, y, 0.0),
                DVec3::new(2.0, y, 0.0),
                DVec3::new(4.0, y, 0.0),
            ],
            quality,
        )
        .unwrap()
    }

    #[test]
    fn test_secondary_curve_count_rules() {
        // Two generating curves, derived count, closing row: 2 + 1 = 3
        let surf = BezierSurface::new(vec![line(0.0, 2), line(1.0, 2)], 2, 0, true).unwrap();
        assert_eq!(surf.rows(), 3);

        let surf = BezierSurface::new(vec![line(0.0, 2), line(1.0, 2)], 2, 0, false).unwrap();
        assert_eq!(surf.rows(), 2);

        let surf = BezierSurface::new(vec![line(0.0, 2), line(1.0, 2)], 2, 5, false).unwrap();
        assert_eq!(surf.rows(), 5);
    }

    #[test]
    fn test_too_few_generating_curves() {
        let err = BezierSurface::new(vec![line(0.0, 2)], 2, 0, true);
        assert!(matches!(err, Err(BezelError::InvalidArgument(_))));
    }

    #[test]
    fn test_secondary_sampling_parameters() {
        // Secondary row i samples the generators at t = i / len(curves):
        // rows 0, 1, 2 of a two-curve loft sample t = 0, 0.5, 1.
        let surf = BezierSurface::loft(vec![line(0.0, 4), line(3.0, 4)], 4).unwrap();
        for (i, sec) in surf.secondary_curves().iter().enumerate() {
            let t = i as f64 / 2.0;
            let pts = sec.control().points();
            assert_eq!(pts.len(), 2);
            assert!((pts[0] - DVec3::new(4.0 * t, 0.0, 0.0)).length() < 1e-12);
            assert!((pts[1] - DVec3::new(4.0 * t, 3.0, 0.0)).length() < 1e-12);
        }
    }

    #[test]
    fn test_vertex_grid_shape() {
        let surf = BezierSurface::loft(vec![line(0.0, 3), line(1.0, 3)], 3).unwrap();
        assert_eq!(surf.rows(), 3);
        assert_eq!(surf.vertices().len(), 3 * 4);
        assert_eq!(surf.texture_coordinates().len(), 3 * 4);
    }

    #[test]
    fn test_face_and_edge_counts() {
        // (rows - 1) * quality retained anchors, two triangles and three
        // edges per anchor
        let quality = 4;
        let surf = BezierSurface::loft(vec![line(0.0, quality), line(2.0, quality)], quality)
            .unwrap();
        let anchors = (surf.rows() - 1) * quality;
        assert_eq!(surf.faces().len(), 2 * anchors);
        assert_eq!(surf.edges().len(), 3 * anchors);
    }

    #[test]
    fn test_indices_stay_in_bounds() {
        let surf = BezierSurface::loft(vec![line(0.0, 5), line(1.5, 5), line(3.0, 5)], 5)
            .unwrap();
        let n = surf.vertices().len() as u32;
        for face in surf.faces() {
            assert!(face.iter().all(|&i| i < n));
        }
        for edge in surf.edges() {
            assert!(edge.iter().all(|&i| i < n));
        }
    }

    #[test]
    fn test_seam_columns_are_skipped() {
        // No face may pair the last column of one row with the first
        // column of the next: anchors at multiples of (quality + 1) are
        // excluded
        let quality = 3;
        let stride = (quality + 1) as u32;
        let surf = BezierSurface::loft(vec![line(0.0, quality), line(1.0, quality)], quality)
            .unwrap();
        for face in surf.faces() {
            let cols: Vec<u32> = face.iter().map(|&i| i % stride).collect();
            let min = *cols.iter().min().unwrap();
            let max = *cols.iter().max().unwrap();
            assert_eq!(max - min, 1, "face {:?} spans columns {:?}", face, cols);
        }
    }

    #[test]
    fn test_set_quality_retessellates() {
        let mut surf = BezierSurface::loft(vec![line(0.0, 2), line(1.0, 2)], 2).unwrap();
        assert_eq!(surf.vertices().len(), surf.rows() * 3);
        surf.set_quality(6).unwrap();
        assert_eq!(surf.quality(), 6);
        assert_eq!(surf.vertices().len(), surf.rows() * 7);
        assert!(surf.set_quality(0).is_err());
    }

    #[test]
    fn test_single_row_override_has_no_faces() {
        let surf = BezierSurface::new(vec![line(0.0, 2), line(1.0, 2)], 2, 1, true).unwrap();
        assert_eq!(surf.rows(), 1);
        assert!(surf.faces().is_empty());
        assert!(surf.edges().is_empty());
        assert_eq!(surf.texture_coordinates().len(), 3);
    }
}
