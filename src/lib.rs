//! Rebuilds the vertex normals of Wavefront OBJ meshes
//!
//! OBJ documents are parsed into a triangulated [`mesh::Mesh`], every vertex normal is recomputed as the average of
//! the adjacent face normals, and the mesh is written back out with those normals.

mod util;
pub mod geometry;
pub mod mesh;
pub mod normals;
pub mod wavefront_obj;
