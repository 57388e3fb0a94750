//! Point construction and checked arithmetic helpers.
//!
//! Addition, subtraction, and multiplication come straight from glam.
//! Division is fallible here: a zero divisor component is reported as
//! [`BezelError::DivisionByZero`] instead of producing an infinity.

use std::str::FromStr;

use bezel_core::{BezelError, Result};
use serde::{Deserialize, Serialize};

use crate::Point3;

/// Component-wise division of `p` by `divisor`.
///
/// Fails if any divisor component is exactly zero.
pub fn checked_div(p: Point3, divisor: Point3) -> Result<Point3> {
    if divisor.x == 0.0 || divisor.y == 0.0 || divisor.z == 0.0 {
        return Err(BezelError::DivisionByZero(format!(
            "point divisor {:?} has a zero component",
            divisor
        )));
    }
    Ok(p / divisor)
}

/// Division of every component of `p` by the scalar `divisor`.
pub fn checked_div_scalar(p: Point3, divisor: f64) -> Result<Point3> {
    if divisor == 0.0 {
        return Err(BezelError::DivisionByZero(
            "scalar divisor is zero".to_string(),
        ));
    }
    Ok(p / divisor)
}

/// Build a point from an ordered `[x, y, z]` slice.
pub fn from_slice(coords: &[f64]) -> Result<Point3> {
    match coords {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(BezelError::InvalidArgument(format!(
            "expected 3 coordinates, got {}",
            coords.len()
        ))),
    }
}

/// One of the three axis-aligned coordinate planes.
///
/// Used to place a 2D point `(a, b)` in 3D space: the two in-plane
/// coordinates fill the plane's axes and the remaining axis takes the
/// `depth` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plane {
    Xy,
    Xz,
    Yz,
}

impl Plane {
    /// Lift the in-plane coordinates `(a, b)` to a 3D point at `depth`.
    pub fn point(self, a: f64, b: f64, depth: f64) -> Point3 {
        match self {
            Plane::Xy => Point3::new(a, b, depth),
            Plane::Xz => Point3::new(a, depth, b),
            Plane::Yz => Point3::new(depth, a, b),
        }
    }
}

impl FromStr for Plane {
    type Err = BezelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "xy" => Ok(Plane::Xy),
            "xz" => Ok(Plane::Xz),
            "yz" => Ok(Plane::Yz),
            _ => Err(BezelError::InvalidArgument(format!(
                "unknown plane tag {:?}, expected \"xy\", \"xz\" or \"yz\"",
                s
            ))),
        }
    }
}
