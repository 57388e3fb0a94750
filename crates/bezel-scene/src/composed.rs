use bezel_math::{Point3, Transform};
use bezel_mesh::PolyMesh;

use crate::object::SceneObject;

/// An ordered group of scene objects under one shared parent transform.
///
/// The container owns the transform; members are resolved by index at
/// evaluation time rather than holding a copy, so mutating the transform
/// after construction moves every current member.
pub struct Composed {
    pub transform: Transform,
    objects: Vec<SceneObject>,
}

impl Composed {
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self {
            transform: Transform::identity(),
            objects,
        }
    }

    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Map a member's local-space point to world space: the member's own
    /// transform applies first, then the shared parent transform.
    pub fn local_to_global(&self, member: usize, p: Point3) -> Option<Point3> {
        let object = self.objects.get(member)?;
        let placed = object.transform.local_to_global(p);
        Some(self.transform.local_to_global(placed))
    }

    /// World-space meshes for every member, in insertion order.
    pub fn world_meshes(&self) -> Vec<PolyMesh> {
        self.objects
            .iter()
            .map(|o| o.world_mesh(Some(&self.transform)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezel_geometry::Cuboid;
    use bezel_math::DVec3;

    fn group_of_two() -> Composed {
        Composed::new(vec![
            SceneObject::new("a", Box::new(Cuboid::default())),
            SceneObject::new("b", Box::new(Cuboid::new(0.5))),
        ])
    }

    #[test]
    fn test_members_resolved_in_order() {
        let group = group_of_two();
        assert_eq!(group.len(), 2);
        assert_eq!(group.objects()[0].name, "a");
        assert_eq!(group.objects()[1].name, "b");
        assert_eq!(group.world_meshes().len(), 2);
    }

    #[test]
    fn test_transform_mutation_moves_all_members() {
        let mut group = group_of_two();
        let before = group.world_meshes();

        group.transform.position = DVec3::new(0.0, 5.0, 0.0);
        let after = group.world_meshes();

        for (b, a) in before.iter().zip(&after) {
            for (p, q) in b.positions.iter().zip(&a.positions) {
                assert!((*q - (*p + DVec3::new(0.0, 5.0, 0.0))).length() < 1e-12);
            }
        }
    }

    #[test]
    fn test_member_chain_matches_nested_application() {
        let mut group = group_of_two();
        group.transform.rotation = DVec3::new(0.0, 0.0, 90.0);
        group.objects_mut()[1].transform.position = DVec3::new(1.0, 0.0, 0.0);

        let p = DVec3::new(0.25, -0.25, 0.5);
        let child = &group.objects()[1].transform;
        let expected = group.transform.local_to_global(child.local_to_global(p));
        assert_eq!(group.local_to_global(1, p), Some(expected));
        assert_eq!(group.local_to_global(7, p), None);
    }
}
