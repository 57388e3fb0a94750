//! Weighted Bézier curves over ordered control points.

use bezel_core::{BezelError, Result};
use bezel_math::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::bernstein;
use crate::tessellate::{self, Tessellate};

/// An ordered set of control points with one positive weight per point.
///
/// Insertion order is the parametrization order: the curve starts at the
/// first point (t = 0) and ends at the last (t = 1). The polynomial degree
/// is the point count minus one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlPoints {
    points: Vec<Point3>,
    weights: Vec<f64>,
}

impl ControlPoints {
    /// Unit-weight control points.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        let weights = vec![1.0; points.len()];
        Self::weighted(points, weights)
    }

    /// Control points with explicit rational weights.
    pub fn weighted(points: Vec<Point3>, weights: Vec<f64>) -> Result<Self> {
        if points.len() < 2 {
            return Err(BezelError::InvalidArgument(format!(
                "a Bézier curve needs at least 2 control points, got {}",
                points.len()
            )));
        }
        if weights.len() != points.len() {
            return Err(BezelError::InvalidArgument(format!(
                "{} weights for {} control points",
                weights.len(),
                points.len()
            )));
        }
        if let Some(w) = weights.iter().find(|&&w| w <= 0.0) {
            return Err(BezelError::InvalidArgument(format!(
                "control point weights must be positive, got {}",
                w
            )));
        }
        Ok(Self { points, weights })
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of control points.
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Polynomial degree (point count minus one).
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }
}

/// A weighted Bézier curve with a tessellation resolution.
///
/// `quality` is the number of polyline segments produced by tessellation.
/// The control points are immutable after construction; `quality` is the
/// only mutable knob, and the tessellated vertex and edge lists are
/// derived from it on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierCurve {
    control: ControlPoints,
    quality: usize,
}

impl BezierCurve {
    pub fn new(control: ControlPoints, quality: usize) -> Result<Self> {
        check_quality(quality)?;
        Ok(Self { control, quality })
    }

    /// Unit-weight curve straight from points.
    pub fn from_points(points: Vec<Point3>, quality: usize) -> Result<Self> {
        Self::new(ControlPoints::new(points)?, quality)
    }

    pub fn control(&self) -> &ControlPoints {
        &self.control
    }

    pub fn quality(&self) -> usize {
        self.quality
    }

    /// Change the tessellation resolution.
    pub fn set_quality(&mut self, quality: usize) -> Result<()> {
        check_quality(quality)?;
        self.quality = quality;
        Ok(())
    }
}

fn check_quality(quality: usize) -> Result<()> {
    if quality == 0 {
        return Err(BezelError::InvalidArgument(
            "tessellation quality must be at least 1".to_string(),
        ));
    }
    Ok(())
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Point3 {
        bernstein::curve_point(self.control.points(), self.control.weights(), t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        bernstein::curve_tangent(self.control.points(), self.control.weights(), t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

impl Tessellate for BezierCurve {
    fn vertices(&self) -> Vec<Point3> {
        tessellate::sample_uniform(self, self.quality)
    }

    fn edges(&self) -> Vec<[u32; 2]> {
        tessellate::polyline_edges(self.quality)
    }

    fn faces(&self) -> Vec<[u32; 3]> {
        Vec::new()
    }

    fn texture_coordinates(&self) -> Vec<Point2> {
        let q = self.quality as f64;
        (0..=self.quality)
            .map(|k| Point2::new(k as f64 / q, 0.0))
            .collect()
    }
}
