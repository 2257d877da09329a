//! Triangle mesh records
//!
//! A [`Mesh`] holds insertion-ordered vertices, texture coordinates and triangles.
//! Triangles refer to vertices and texture coordinates by 0-based index into the mesh's lists.

use indexmap::IndexMap;
use thiserror::Error;
use crate::geometry::{Vector2D, Vector3D};

/// Float type used for all mesh data
pub type MeshFloat = f32;

/// A mesh vertex: a position and its normal accumulator
///
/// The normal starts out as the zero vector. [`Mesh::compute_normals`] sums the face normals of adjacent
/// triangles into it, then scales it to unit length (or leaves it at zero if nothing contributed).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Vertex {
    position: Vector3D<MeshFloat>,
    normal: Vector3D<MeshFloat>,
}

impl Vertex {
    pub fn new(position: Vector3D<MeshFloat>) -> Self {
        Vertex {
            position,
            normal: Vector3D::zero(),
        }
    }

    pub fn position(&self) -> Vector3D<MeshFloat> {
        self.position
    }

    pub fn normal(&self) -> Vector3D<MeshFloat> {
        self.normal
    }

    pub(crate) fn clear_normal(&mut self) {
        self.normal = Vector3D::zero();
    }

    pub(crate) fn add_to_normal(&mut self, face_normal: Vector3D<MeshFloat>) {
        self.normal += face_normal;
    }

    /// Scales the accumulated normal to unit length; A zero normal is left untouched
    pub(crate) fn normalize_normal(&mut self) {
        let length = self.normal.magnitude();
        if length != 0.0 {
            self.normal.scale(1.0 / length);
        }
    }
}

/// A mesh triangle
///
/// Vertex and texture-coordinate indices are parallel arrays; Entry `i` of both describes the triangle's `i`th corner.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Triangle {
    vertices: [usize; 3],
    tex_coords: [usize; 3],
    normal: Option<Vector3D<MeshFloat>>,
}

impl Triangle {
    pub fn new(vertices: [usize; 3], tex_coords: [usize; 3]) -> Self {
        Triangle {
            vertices,
            tex_coords,
            normal: None,
        }
    }

    pub fn vertices(&self) -> [usize; 3] {
        self.vertices
    }

    pub fn tex_coords(&self) -> [usize; 3] {
        self.tex_coords
    }

    /// Cached face normal; `None` until normals have been computed
    pub fn face_normal(&self) -> Option<Vector3D<MeshFloat>> {
        self.normal
    }

    /// Whether the cached face normal has NaN components (zero-area or collinear triangle)
    pub fn is_degenerate(&self) -> bool {
        self.normal.map_or(false, Vector3D::has_nan)
    }

    /// Returns the cached face normal, computing and caching it from the positions in `vertices` if absent
    ///
    /// The normal is the normalized cross product of `(v1 - v0) × (v2 - v0)`. Degenerate triangles produce NaN components.
    ///
    /// Panics if a vertex index is out of range of `vertices`; Use [`Mesh::validate`] first.
    pub(crate) fn face_normal_or_compute(&mut self, vertices: &[Vertex]) -> Vector3D<MeshFloat> {
        *self.normal.get_or_insert_with(|| {
            let [a, b, c] = self.vertices.map(|index| vertices[index].position);
            (b - a).cross_product(c - a).normalized()
        })
    }
}

/// Axis aligned bounding box
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct BoundingBox {
    pub min: Vector3D<MeshFloat>,
    pub max: Vector3D<MeshFloat>,
}

/// A triangle refers to a vertex the mesh does not have
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("triangle {triangle} references vertex {vertex} but the mesh only has {vertex_count} vertices")]
pub struct FaceIndexError {
    pub triangle: usize,
    /// 0-based vertex index
    pub vertex: usize,
    pub vertex_count: usize,
}

/// Triangle mesh, as read from an OBJ document
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Mesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) tex_coords: Vec<Vector2D<MeshFloat>>,
    pub(crate) input_normals: Vec<Vector3D<MeshFloat>>,
    pub(crate) triangles: Vec<Triangle>,
    pub(crate) face_count: usize,
    pub(crate) ignored_records: IndexMap<String, usize>,
}

impl Mesh {
    pub fn new() -> Self {
        Mesh::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn tex_coords(&self) -> &[Vector2D<MeshFloat>] {
        &self.tex_coords
    }

    /// Normals that were present in the input. These are never used; Vertex normals are always recomputed
    pub fn input_normals(&self) -> &[Vector3D<MeshFloat>] {
        &self.input_normals
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of face records read; A quad counts as one face but produces two triangles
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Recognised but unsupported record tags, with the number of lines skipped for each
    pub fn ignored_records(&self) -> &IndexMap<String, usize> {
        &self.ignored_records
    }

    pub fn push_vertex(&mut self, position: Vector3D<MeshFloat>) {
        self.vertices.push(Vertex::new(position));
    }

    pub fn push_tex_coord(&mut self, uv: Vector2D<MeshFloat>) {
        self.tex_coords.push(uv);
    }

    pub fn push_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Checks that every triangle references existing vertices
    ///
    /// Texture indices are not checked; Faces without texture indices default to index 0, even when there are no texture coordinates.
    pub fn validate(&self) -> Result<(), FaceIndexError> {
        let vertex_count = self.vertices.len();
        for (triangle, corners) in self.triangles.iter().enumerate() {
            if let Some(&vertex) = corners.vertices.iter().find(|&&index| index >= vertex_count) {
                return Err(FaceIndexError { triangle, vertex, vertex_count });
            }
        }
        Ok(())
    }

    /// Per-axis extent of the vertex positions, `None` for a mesh without vertices
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold(BoundingBox { min: first, max: first }, |bounds, vertex| {
            BoundingBox {
                min: bounds.min.map_pairwise(vertex.position, MeshFloat::min),
                max: bounds.max.map_pairwise(vertex.position, MeshFloat::max),
            }
        }))
    }
}

/// Reads a [`Mesh`] from some input
pub trait MeshReader<Input, Error> {
    fn read_mesh(input: Input) -> Result<Mesh, Error>;
}

/// Writes a [`Mesh`] to some output, producing a report of what was written
pub trait MeshWriter<Output, Error> {
    type Report;

    fn write_mesh(output: Output, mesh: &Mesh) -> Result<Self::Report, Error>;
}
