mod frustum;
mod prism;
mod pyramid;

pub use frustum::ViewFrustum;
pub use prism::TriangularPrism;
pub use pyramid::{Tessellation, TriangularPyramid};

use crate::error::{ParameterError, Result};
use crate::mesh::Mesh;

/// A parametric model that can emit its wireframe mesh.
///
/// Implementors are validated when constructed, so `execute` produces the
/// whole mesh or nothing.
pub trait Wireframe {
    /// A human-readable label built from the model's parameters.
    fn name(&self) -> String;

    /// Generates the model's vertices and line segments.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge would reference a vertex that has not
    /// been emitted.
    fn execute(&self) -> Result<Mesh>;
}

/// A model whose tessellation level can be adjusted after construction.
pub trait MeshMaker: Wireframe + Sized {
    /// Number of lines of latitude.
    fn latitude_count(&self) -> usize;

    /// Number of lines of longitude.
    fn longitude_count(&self) -> usize;

    /// Builds a new model with the same shape and the given counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the counts are out of range for this model.
    fn remake(&self, n: i32, k: i32) -> Result<Self>;
}

/// Checks a count parameter against its lower bound.
pub(crate) fn require_at_least(
    parameter: &'static str,
    value: i32,
    min: i32,
) -> std::result::Result<usize, ParameterError> {
    if value < min {
        return Err(ParameterError::InvalidParameter {
            parameter,
            value,
            min,
        });
    }
    usize::try_from(value).map_err(|_| ParameterError::InvalidParameter {
        parameter,
        value,
        min,
    })
}

/// Logs the outcome of a generator run.
pub(crate) fn log_generated(mesh: &Mesh) {
    tracing::debug!(
        model = %mesh.name(),
        vertices = mesh.vertex_count(),
        edges = mesh.edge_count(),
        "generated wireframe"
    );
}
