use super::{LineSegment, Mesh};

/// Findings from [`Mesh::check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshCheck {
    /// The mesh has edges but no vertices.
    pub missing_vertices: bool,
    /// The mesh has vertices but no edges.
    pub missing_edges: bool,
    /// Edges that reference a vertex index outside the vertex list.
    pub invalid_edges: Vec<LineSegment>,
}

impl MeshCheck {
    /// Returns `true` if no problem was found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !self.missing_vertices && !self.missing_edges && self.invalid_edges.is_empty()
    }
}

impl Mesh {
    /// Looks for obvious problems that would make the mesh render badly:
    /// a missing vertex or edge list, or edges with dangling indices.
    ///
    /// Each problem is also reported as a `warn` event.
    #[must_use]
    pub fn check(&self) -> MeshCheck {
        let count = self.vertices.len();
        let mut report = MeshCheck {
            missing_vertices: count == 0 && !self.edges.is_empty(),
            missing_edges: count != 0 && self.edges.is_empty(),
            invalid_edges: Vec::new(),
        };

        if report.missing_vertices {
            tracing::warn!(model = %self.name, "model does not have any vertices");
        }
        if report.missing_edges {
            tracing::warn!(model = %self.name, "model does not have any line segments");
        }

        for edge in &self.edges {
            if edge.start >= count || edge.end >= count {
                tracing::warn!(
                    model = %self.name,
                    start = edge.start,
                    end = edge.end,
                    vertices = count,
                    "line segment has an invalid vertex index"
                );
                report.invalid_edges.push(*edge);
            }
        }

        report
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn empty_mesh_is_ok() {
        assert!(Mesh::new("empty").check().is_ok());
    }

    #[test]
    fn vertices_without_edges() {
        let mut mesh = Mesh::new("points");
        mesh.add_vertex(Point3::origin());
        let report = mesh.check();
        assert!(report.missing_edges);
        assert!(!report.is_ok());
    }

    #[test]
    fn dangling_edges_are_reported() {
        let mut mesh = Mesh::new("bad");
        mesh.add_vertices([Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        mesh.add_edge(0, 1).unwrap();
        // Only reachable by building the edge list directly.
        mesh.edges.push(LineSegment::new(1, 5));
        let report = mesh.check();
        assert_eq!(report.invalid_edges, vec![LineSegment::new(1, 5)]);
        assert!(!report.missing_edges);
    }

    #[test]
    fn edges_without_vertices() {
        let mut mesh = Mesh::new("bad");
        mesh.edges.push(LineSegment::new(0, 1));
        let report = mesh.check();
        assert!(report.missing_vertices);
        assert_eq!(report.invalid_edges.len(), 1);
    }
}
