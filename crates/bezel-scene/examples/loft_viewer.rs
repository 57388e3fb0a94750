//! Builds a lofted Bézier scene — two mirrored surface pairs plus their
//! profile curves — and exports the surfaces as a Wavefront OBJ file.
//!
//! ```bash
//! cargo run -p bezel-scene --example loft_viewer [output.obj]
//! ```

use std::path::PathBuf;

use bezel_core::Result;
use bezel_core::traits::BoundingBox;
use bezel_geometry::{BezierCurve, BezierSurface};
use bezel_math::{DVec3, Plane, Transform};
use bezel_scene::export::export_obj;
use bezel_scene::{Composed, SceneObject};

const QUALITY: usize = 10;

/// A profile curve drawn on the xz plane at the given depth (y).
fn profile(points: &[(f64, f64)], depth: f64) -> Result<BezierCurve> {
    let pts = points
        .iter()
        .map(|&(a, b)| Plane::Xz.point(a, b, depth))
        .collect();
    BezierCurve::from_points(pts, QUALITY)
}

fn main() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("loft_scene.obj"));

    // Far profile pair (y = 8)
    let far_lower = profile(&[(0.0, 0.0), (2.0, 0.0), (3.0, 2.0)], 8.0)?;
    let far_upper = profile(&[(3.0, 2.0), (4.0, 5.0), (4.0, 8.0)], 8.0)?;

    // Near profile pair (y = 0)
    let near_lower = profile(&[(0.0, 1.0), (6.0, 1.0), (8.0, 0.0)], 0.0)?;
    let near_upper = profile(&[(8.0, 0.0), (5.0, 2.0), (5.0, 8.0)], 0.0)?;

    // Middle profile pair (y = 4)
    let mid_lower = profile(&[(0.0, 1.0), (2.0, 1.0), (3.0, 3.0)], 4.0)?;
    let mid_upper = profile(&[(2.0, 2.0), (3.0, 5.0), (6.0, 8.0)], 4.0)?;

    let lower = BezierSurface::loft(
        vec![far_lower.clone(), mid_lower.clone(), near_lower.clone()],
        QUALITY,
    )?;
    let upper = BezierSurface::loft(
        vec![far_upper.clone(), mid_upper.clone(), near_upper.clone()],
        QUALITY,
    )?;

    // The mirrored pair shares the same lofts, flipped across the yz plane
    let mirror = Transform::from_scale(DVec3::new(-1.0, 1.0, 1.0));

    let mut scene = Composed::new(vec![
        SceneObject::new("lower", Box::new(lower.clone())),
        SceneObject::new("upper", Box::new(upper.clone())),
        SceneObject::with_transform("lower_mirrored", Box::new(lower), mirror),
        SceneObject::with_transform("upper_mirrored", Box::new(upper), mirror),
    ]);
    scene.transform.rotation.z = -90.0;

    let wireframe = Composed::new(vec![
        SceneObject::new("far_lower", Box::new(far_lower)),
        SceneObject::new("far_upper", Box::new(far_upper)),
        SceneObject::new("near_lower", Box::new(near_lower)),
        SceneObject::new("near_upper", Box::new(near_upper)),
    ]);

    for (object, mesh) in scene.objects().iter().zip(scene.world_meshes()) {
        let (min, max) = mesh.bounding_box();
        println!(
            "{:16} {:4} vertices {:4} triangles  bounds [{:.2} {:.2} {:.2}] .. [{:.2} {:.2} {:.2}]",
            object.name,
            mesh.vertex_count(),
            mesh.triangle_count(),
            min.x,
            min.y,
            min.z,
            max.x,
            max.y,
            max.z
        );
    }
    println!(
        "wireframe group: {} curves, {} edges total",
        wireframe.len(),
        wireframe
            .world_meshes()
            .iter()
            .map(|m| m.edge_count())
            .sum::<usize>()
    );

    export_obj(&output, &scene)?;
    println!("wrote {}", output.display());
    Ok(())
}
