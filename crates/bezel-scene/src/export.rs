//! Wavefront OBJ export: the seam between the geometry core and whatever
//! renders it.

use std::io::Write;
use std::path::Path;

use bezel_core::Result;
use bezel_mesh::PolyMesh;

use crate::composed::Composed;

/// Write one mesh as a named OBJ object.
///
/// Emits `v`/`vt`/`vn` records followed by 1-based `f v/vt/vn` faces;
/// a mesh with no triangles falls back to `l` polyline records over its
/// edge list.
pub fn write_obj<W: Write>(out: &mut W, name: &str, mesh: &PolyMesh) -> Result<()> {
    write_obj_offset(out, name, mesh, 0)
}

/// Export a composed group's world-space meshes to one OBJ file.
///
/// Vertex indices accumulate across objects, per the format.
pub fn export_obj(path: &Path, group: &Composed) -> Result<()> {
    let mut out = std::fs::File::create(path)?;
    let mut offset = 0;
    for (object, mesh) in group.objects().iter().zip(group.world_meshes()) {
        write_obj_offset(&mut out, &object.name, &mesh, offset)?;
        offset += mesh.vertex_count() as u32;
    }
    Ok(())
}

fn write_obj_offset<W: Write>(
    out: &mut W,
    name: &str,
    mesh: &PolyMesh,
    offset: u32,
) -> Result<()> {
    writeln!(out, "o {}", name)?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(out, "vt {} {}", uv.x, uv.y)?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    // OBJ indices are 1-based and file-global
    let base = offset + 1;
    if mesh.indices.is_empty() {
        for [a, b] in &mesh.edges {
            writeln!(out, "l {} {}", a + base, b + base)?;
        }
    } else {
        for tri in mesh.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] + base, tri[1] + base, tri[2] + base);
            writeln!(
                out,
                "f {0}/{0}/{0} {1}/{1}/{1} {2}/{2}/{2}",
                a, b, c
            )?;
        }
    }
    Ok(())
}
