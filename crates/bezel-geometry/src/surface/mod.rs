//! Surface construction from generating curves.

mod bezier;

pub use bezier::BezierSurface;
