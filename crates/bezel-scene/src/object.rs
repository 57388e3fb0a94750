use bezel_geometry::Tessellate;
use bezel_math::Transform;
use bezel_mesh::PolyMesh;

/// A named geometric object with its own placement.
pub struct SceneObject {
    pub name: String,
    pub geometry: Box<dyn Tessellate>,
    pub transform: Transform,
}

impl SceneObject {
    pub fn new(name: &str, geometry: Box<dyn Tessellate>) -> Self {
        Self {
            name: name.to_string(),
            geometry,
            transform: Transform::identity(),
        }
    }

    pub fn with_transform(
        name: &str,
        geometry: Box<dyn Tessellate>,
        transform: Transform,
    ) -> Self {
        Self {
            name: name.to_string(),
            geometry,
            transform,
        }
    }

    /// Local-space mesh with derived per-vertex attributes.
    pub fn mesh(&self) -> PolyMesh {
        PolyMesh::from_object(self.geometry.as_ref())
    }

    /// Mesh with positions mapped through this object's transform and then
    /// the optional parent transform. Normals and texture coordinates are
    /// the local-space attributes.
    pub fn world_mesh(&self, parent: Option<&Transform>) -> PolyMesh {
        let mut mesh = self.mesh();
        for p in &mut mesh.positions {
            let placed = self.transform.local_to_global(*p);
            *p = match parent {
                Some(t) => t.local_to_global(placed),
                None => placed,
            };
        }
        mesh
    }
}
