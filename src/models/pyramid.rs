use crate::error::Result;
use crate::math::{equilateral_ring, lerp, Point3};
use crate::mesh::Mesh;

use super::{log_generated, require_at_least, MeshMaker, Wireframe};

/// How the lateral faces of a [`TriangularPyramid`] are tessellated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tessellation {
    /// Base triangle plus three edges up to the apex.
    Simple,
    /// `k` longitude lines fanning over each side from the apex to the base
    /// center, and `n` latitude rings from the base upwards.
    Subdivided { n: usize, k: usize },
}

/// A wireframe tetrahedron: an equilateral triangle base inscribed in a
/// circle of radius `r` in the xz-plane, and an apex on the y-axis at height
/// `h`.
///
/// With `h = r * sqrt(2)` the tetrahedron is regular with side `r * sqrt(3)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularPyramid {
    r: f64,
    h: f64,
    tessellation: Tessellation,
}

impl TriangularPyramid {
    /// Creates an untessellated pyramid.
    #[must_use]
    pub fn new(r: f64, h: f64) -> Self {
        Self {
            r,
            h,
            tessellation: Tessellation::Simple,
        }
    }

    /// Creates a regular tetrahedron with side length `s`, one face in the
    /// xz-plane and the apex at height `s * sqrt(2/3)`.
    #[must_use]
    pub fn from_side(s: f64) -> Self {
        Self::new(s / 3.0_f64.sqrt(), s * 2.0_f64.sqrt() / 3.0_f64.sqrt())
    }

    /// Creates a pyramid with `n` lines of latitude and `k` lines of
    /// longitude on each side.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` or `k` is less than 1.
    pub fn subdivided(r: f64, h: f64, n: i32, k: i32) -> Result<Self> {
        let n = require_at_least("n", n, 1)?;
        let k = require_at_least("k", k, 1)?;
        Ok(Self {
            r,
            h,
            tessellation: Tessellation::Subdivided { n, k },
        })
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.r
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.h
    }

    #[must_use]
    pub fn tessellation(&self) -> Tessellation {
        self.tessellation
    }

    fn execute_simple(&self, mesh: &mut Mesh) -> Result<()> {
        let base = mesh.add_vertices(equilateral_ring(self.r, 0.0));
        let apex = mesh.add_vertex(Point3::new(0.0, self.h, 0.0));

        mesh.add_loop(&[base, base + 1, base + 2])?;
        for i in 0..3 {
            mesh.add_edge(base + i, apex)?;
        }
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn execute_subdivided(&self, mesh: &mut Mesh, n: usize, k: usize) -> Result<()> {
        let apex_point = Point3::new(0.0, self.h, 0.0);
        let apex = mesh.add_vertex(apex_point);
        let center = mesh.add_vertex(Point3::origin());

        let [v0, v1, v2] = equilateral_ring(self.r, 0.0);

        // Longitude lines: apex -> point on a base edge -> base center.
        for j in 0..k {
            let t = j as f64 * (1.0 / k as f64);
            let first = mesh.add_vertices([
                lerp(&v0, &v1, t),
                lerp(&v1, &v2, t),
                lerp(&v2, &v0, t),
            ]);
            for side in first..first + 3 {
                mesh.add_edge(apex, side)?;
                mesh.add_edge(side, center)?;
            }
        }

        // Latitude rings, from the base upwards. The apex is never reached.
        for i in 0..n {
            let t = i as f64 * (1.0 / n as f64);
            let ring = mesh.add_vertices([
                lerp(&v0, &apex_point, t),
                lerp(&v1, &apex_point, t),
                lerp(&v2, &apex_point, t),
            ]);
            mesh.add_loop(&[ring, ring + 1, ring + 2])?;
        }
        Ok(())
    }
}

impl Default for TriangularPyramid {
    /// A regular tetrahedron of height 1.
    fn default() -> Self {
        Self::from_side(3.0_f64.sqrt() / 2.0_f64.sqrt())
    }
}

impl Wireframe for TriangularPyramid {
    fn name(&self) -> String {
        match self.tessellation {
            Tessellation::Simple => format!("Triangular_Pyramid({:.2},{:.2})", self.r, self.h),
            Tessellation::Subdivided { n, k } => format!(
                "Triangular_Pyramid({:.2},{:.2},{},{})",
                self.r, self.h, n, k
            ),
        }
    }

    fn execute(&self) -> Result<Mesh> {
        let mut mesh = Mesh::new(self.name());
        match self.tessellation {
            Tessellation::Simple => self.execute_simple(&mut mesh)?,
            Tessellation::Subdivided { n, k } => self.execute_subdivided(&mut mesh, n, k)?,
        }
        log_generated(&mesh);
        Ok(mesh)
    }
}

impl MeshMaker for TriangularPyramid {
    fn latitude_count(&self) -> usize {
        match self.tessellation {
            Tessellation::Simple => 1,
            Tessellation::Subdivided { n, .. } => n,
        }
    }

    fn longitude_count(&self) -> usize {
        match self.tessellation {
            Tessellation::Simple => 1,
            Tessellation::Subdivided { k, .. } => k,
        }
    }

    fn remake(&self, n: i32, k: i32) -> Result<Self> {
        Self::subdivided(self.r, self.h, n, k)
    }
}
