use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Affine placement built from position, Euler rotation, and scale.
///
/// The composed matrix applies scale first, then rotation about X, then Y,
/// then Z, then translation. The axis order is fixed: Euler rotations do
/// not commute, and every consumer of this type relies on the same order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub position: Point3,
    /// Euler angles in degrees, applied about X, then Y, then Z.
    pub rotation: Vector3,
    /// Per-axis scale factors. Negative values mirror.
    pub scale: Vector3,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Point3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }

    pub fn from_position(position: Point3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn from_scale(scale: Vector3) -> Self {
        Self {
            scale,
            ..Self::identity()
        }
    }

    /// Compose position, rotation, and scale into one affine matrix.
    pub fn matrix(&self) -> DMat4 {
        let rx = self.rotation.x.to_radians();
        let ry = self.rotation.y.to_radians();
        let rz = self.rotation.z.to_radians();
        DMat4::from_translation(self.position)
            * DMat4::from_rotation_z(rz)
            * DMat4::from_rotation_y(ry)
            * DMat4::from_rotation_x(rx)
            * DMat4::from_scale(self.scale)
    }

    /// Map a local-space point into the parent space.
    ///
    /// The point is lifted to homogeneous form, run through [`matrix`],
    /// and projected back. For a nested placement, apply the parent's
    /// `local_to_global` to this function's result; the chain is never
    /// collapsed into a premultiplied matrix.
    ///
    /// [`matrix`]: Transform::matrix
    pub fn local_to_global(&self, p: Point3) -> Point3 {
        self.matrix().transform_point3(p)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::dvec3;

    #[test]
    fn test_identity_is_identity() {
        let t = Transform::identity();
        let p = dvec3(1.0, 2.0, 3.0);
        assert!((t.local_to_global(p) - p).length() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::from_position(dvec3(10.0, 20.0, 30.0));
        let q = t.local_to_global(dvec3(1.0, 2.0, 3.0));
        assert!((q - dvec3(11.0, 22.0, 33.0)).length() < 1e-12);
    }

    #[test]
    fn test_rotation_about_z() {
        let mut t = Transform::identity();
        t.rotation.z = 90.0;
        let q = t.local_to_global(dvec3(1.0, 0.0, 0.0));
        assert_relative_eq!(q.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(q.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_axis_order_is_x_then_y() {
        // X before Y: (0,0,1) --Rx(90)--> (0,-1,0) --Ry(90)--> (0,-1,0).
        // The reversed order would give (1,0,0), so this pins the order.
        let mut t = Transform::identity();
        t.rotation.x = 90.0;
        t.rotation.y = 90.0;
        let q = t.local_to_global(dvec3(0.0, 0.0, 1.0));
        assert!((q - dvec3(0.0, -1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_scale_applied_before_rotation() {
        let mut t = Transform::identity();
        t.scale = dvec3(2.0, 1.0, 1.0);
        t.rotation.z = 90.0;
        let q = t.local_to_global(dvec3(1.0, 0.0, 0.0));
        assert!((q - dvec3(0.0, 2.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_mirror_scale() {
        let t = Transform::from_scale(dvec3(-1.0, 1.0, 1.0));
        let q = t.local_to_global(dvec3(3.0, 4.0, 5.0));
        assert_eq!(q, dvec3(-3.0, 4.0, 5.0));
    }

    #[test]
    fn test_nested_composition_matches_matrix_product() {
        let mut parent = Transform::from_position(dvec3(1.0, 0.0, -2.0));
        parent.rotation = dvec3(30.0, 0.0, 45.0);
        let mut child = Transform::from_scale(dvec3(2.0, 2.0, 2.0));
        child.rotation = dvec3(0.0, 60.0, 0.0);
        child.position = dvec3(0.5, 0.5, 0.5);

        let p = dvec3(0.3, -0.7, 1.1);
        let chained = parent.local_to_global(child.local_to_global(p));
        let product = (parent.matrix() * child.matrix()).transform_point3(p);
        assert!((chained - product).length() < 1e-12);
    }
}
