pub mod vertex;

pub use vertex::ColoredVertex;

use crate::error::{ConvertError, Result};

/// A triangle, as 0-based indices into the vertex list
pub type Triangle = [usize; 3];

/// Vertices with their colours, plus the triangles built on top of them.
/// Positions and colours always grow together, one vertex at a time
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColoredMesh {
    vertices: Vec<ColoredVertex>,
    triangles: Vec<Triangle>,
}
impl ColoredMesh {
    pub fn push_vertex(&mut self, vertex: ColoredVertex) {
        self.vertices.push(vertex);
    }

    pub fn push_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn vertices(&self) -> &[ColoredVertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Flat x0 y0 z0 x1 ... array, in vertex order
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.vertices.iter().flat_map(|v| v.position)
    }

    /// Flat r0 g0 b0 a0 r1 ... array, in vertex order
    pub fn colours(&self) -> impl Iterator<Item = f64> + '_ {
        self.vertices.iter().flat_map(|v| v.colour)
    }

    /// Checks that the mesh can be written out: at least one vertex and one
    /// triangle, and no triangle pointing past the end of the vertex list
    pub fn validate(&self) -> Result<()> {
        if self.vertices.is_empty() {
            return Err(ConvertError::EmptyMesh("no vertices defined"));
        }
        if self.triangles.is_empty() {
            return Err(ConvertError::EmptyMesh("no faces defined"));
        }

        let vertex_count = self.vertices.len();
        for (triangle, indices) in self.triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(ConvertError::InvalidTriangle {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}
