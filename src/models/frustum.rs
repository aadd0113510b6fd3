use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh;

use super::{log_generated, Wireframe};

/// A wireframe of a camera's perspective view volume: the frustum of a
/// pyramid along the negative z-axis with its apex at the origin.
///
/// The near face lies in the plane `z = -near` and is bounded by
/// `left..right` and `bottom..top`. The far face is its projection from the
/// origin onto `z = -far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrustum {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
}

impl ViewFrustum {
    /// Creates a frustum from explicit near-face bounds.
    #[must_use]
    pub fn new(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Creates a frustum from a vertical field-of-view angle `fovy` (in
    /// degrees) and the aspect ratio of the near face.
    #[must_use]
    pub fn perspective(fovy: f64, aspect: f64, near: f64, far: f64) -> Self {
        let top = near * (fovy / 2.0).to_radians().tan();
        let right = top * aspect;
        Self::new(-right, right, -top, top, near, far)
    }

    /// Returns `(left, right, bottom, top)` of the near face.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.left, self.right, self.bottom, self.top)
    }

    #[must_use]
    pub fn near(&self) -> f64 {
        self.near
    }

    #[must_use]
    pub fn far(&self) -> f64 {
        self.far
    }

    /// Projects a near-face coordinate onto the far plane.
    fn project(&self, coord: f64) -> f64 {
        (coord / self.near) * self.far
    }
}

impl Default for ViewFrustum {
    fn default() -> Self {
        Self::new(-0.25, 0.25, -0.25, 0.25, 0.25, 1.0)
    }
}

impl Wireframe for ViewFrustum {
    fn name(&self) -> String {
        "View Frustum Model".into()
    }

    fn execute(&self) -> Result<Mesh> {
        let (l, r, b, t) = self.bounds();
        let (n, f) = (self.near, self.far);
        let mut mesh = Mesh::new(self.name());

        let front = mesh.add_vertices([
            Point3::new(l, t, -n),
            Point3::new(r, t, -n),
            Point3::new(r, b, -n),
            Point3::new(l, b, -n),
        ]);
        let back = mesh.add_vertices([
            Point3::new(self.project(l), self.project(t), -f),
            Point3::new(self.project(r), self.project(t), -f),
            Point3::new(self.project(r), self.project(b), -f),
            Point3::new(self.project(l), self.project(b), -f),
        ]);

        mesh.add_loop(&[front, front + 1, front + 2, front + 3])?;
        mesh.add_loop(&[back, back + 1, back + 2, back + 3])?;
        for i in 0..4 {
            mesh.add_edge(front + i, back + i)?;
        }

        log_generated(&mesh);
        Ok(mesh)
    }
}
