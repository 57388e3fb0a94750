//! Bezel geometry: Bézier curves, lofted surfaces, and tessellation.

pub mod bernstein;
pub mod curve;
pub mod primitive;
pub mod surface;
pub mod tessellate;

pub use curve::{BezierCurve, ControlPoints, Curve};
pub use primitive::Cuboid;
pub use surface::BezierSurface;
pub use tessellate::Tessellate;
