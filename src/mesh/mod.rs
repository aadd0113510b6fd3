mod check;

pub use check::MeshCheck;

use std::fmt;

use crate::error::MeshError;
use crate::math::Point3;

/// A line segment between two vertices of a [`Mesh`].
///
/// The pair order is kept as emitted; renderers treat it as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    /// Index of the first endpoint.
    pub start: usize,
    /// Index of the second endpoint.
    pub end: usize,
}

impl LineSegment {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns this segment with both indices shifted by `offset`.
    #[must_use]
    pub fn offset(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineSegment: ({}, {})", self.start, self.end)
    }
}

/// A wireframe mesh: an ordered vertex list and an ordered edge list.
///
/// Vertex indices are assigned in insertion order starting at zero and are
/// never reused. Edges may only reference vertices that are already present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Point3>,
    edges: Vec<LineSegment>,
}

impl Mesh {
    /// Creates a new, empty mesh with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the display name of the mesh.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name of the mesh.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // --- Vertex operations ---

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, point: Point3) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    /// Appends several vertices in order and returns the index of the first.
    pub fn add_vertices<const N: usize>(&mut self, points: [Point3; N]) -> usize {
        let first = self.vertices.len();
        self.vertices.extend(points);
        first
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` has not been assigned yet.
    pub fn vertex(&self, index: usize) -> Result<&Point3, MeshError> {
        self.vertices.get(index).ok_or(MeshError::VertexOutOfRange {
            index,
            count: self.vertices.len(),
        })
    }

    /// Returns all vertices in index order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Edge operations ---

    /// Appends an edge between two existing vertices.
    ///
    /// # Errors
    ///
    /// Returns an error, and appends nothing, if either index does not refer
    /// to a vertex already in the mesh.
    pub fn add_edge(&mut self, start: usize, end: usize) -> Result<(), MeshError> {
        let count = self.vertices.len();
        for index in [start, end] {
            if index >= count {
                return Err(MeshError::VertexOutOfRange { index, count });
            }
        }
        self.edges.push(LineSegment::new(start, end));
        Ok(())
    }

    /// Appends the closed loop `i0 -> i1 -> ... -> i0`.
    ///
    /// # Errors
    ///
    /// Returns an error if any index does not refer to an existing vertex.
    /// Edges are only appended once every index has been checked.
    pub fn add_loop(&mut self, indices: &[usize]) -> Result<(), MeshError> {
        let count = self.vertices.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= count) {
            return Err(MeshError::VertexOutOfRange { index, count });
        }
        for (i, &start) in indices.iter().enumerate() {
            let end = indices[(i + 1) % indices.len()];
            self.edges.push(LineSegment::new(start, end));
        }
        Ok(())
    }

    /// Returns all edges in emission order.
    #[must_use]
    pub fn edges(&self) -> &[LineSegment] {
        &self.edges
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Merging ---

    /// Appends every vertex and edge of `other`, shifting its indices past
    /// the vertices already in this mesh.
    pub fn append(&mut self, other: &Mesh) {
        let offset = self.vertices.len();
        self.vertices.extend_from_slice(&other.vertices);
        self.edges
            .extend(other.edges.iter().map(|edge| edge.offset(offset)));
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {}", self.name)?;
        writeln!(f, "Model has {} vertices.", self.vertices.len())?;
        writeln!(f, "Model has {} line segments.", self.edges.len())?;
        for (i, v) in self.vertices.iter().enumerate() {
            writeln!(f, "{i}: ({:.5}, {:.5}, {:.5})", v.x, v.y, v.z)?;
        }
        for (i, edge) in self.edges.iter().enumerate() {
            writeln!(f, "{i}: {edge}")?;
        }
        Ok(())
    }
}
