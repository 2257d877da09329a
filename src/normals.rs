//! Vertex normal reconstruction
//!
//! Every vertex ends up with the average of the face normals of the triangles sharing it.
//! Each triangle's face normal is added to its three vertices, after which all vertex normals are
//! scaled to unit length. Smoothing groups are not taken into account.

use tracing::{debug, warn};
use crate::mesh::{FaceIndexError, Mesh, Vertex};

/// Outcome of [`Mesh::compute_normals`]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct NormalReport {
    /// Triangles whose face normal was computed by this call (previously cached normals are reused)
    pub computed_face_normals: usize,
    /// Triangles with a NaN face normal; These contribute to no vertex and are left out of the output
    pub degenerate_triangles: usize,
    /// Vertices without any contributing triangle, left at the zero normal
    pub zero_normal_vertices: usize,
}

impl Mesh {
    /// Computes the face normal of every triangle and the averaged normal of every vertex
    ///
    /// Vertex normals are rebuilt from scratch on every call.
    /// Degenerate (zero-area) triangles are skipped with a warning; They are not an error.
    /// Fails only if a triangle references a vertex that doesn't exist, in which case the mesh is left unmodified.
    pub fn compute_normals(&mut self) -> Result<NormalReport, FaceIndexError> {
        self.validate()?;
        self.vertices.iter_mut().for_each(Vertex::clear_normal);

        let mut report = NormalReport::default();
        for (index, triangle) in self.triangles.iter_mut().enumerate() {
            if triangle.face_normal().is_none() {
                report.computed_face_normals += 1;
            }
            let normal = triangle.face_normal_or_compute(&self.vertices);

            if normal.has_nan() {
                warn!(triangle = index, vertices = ?triangle.vertices(), "triangle with NaN normal found, it will be left out");
                report.degenerate_triangles += 1;
                continue;
            }

            for vertex_index in triangle.vertices() {
                let vertex = &mut self.vertices[vertex_index];
                let was_nan = vertex.normal().has_nan();
                vertex.add_to_normal(normal);
                if !was_nan && vertex.normal().has_nan() {
                    warn!(vertex = vertex_index, triangle = index, "vertex normal became NaN");
                }
            }
        }

        for vertex in &mut self.vertices {
            vertex.normalize_normal();
            if vertex.normal().is_zero() {
                report.zero_normal_vertices += 1;
            }
        }

        debug!(
            triangles = self.triangles.len(),
            computed = report.computed_face_normals,
            degenerate = report.degenerate_triangles,
            zero_normal_vertices = report.zero_normal_vertices,
            "vertex normals computed"
        );
        Ok(report)
    }
}
