use crate::error::Result;
use crate::math::{equilateral_ring, Point3};
use crate::mesh::Mesh;

use super::{log_generated, require_at_least, Wireframe};

/// A wireframe right equilateral triangular prism along the y-axis with a
/// tetrahedron attached to each triangular end.
///
/// The body runs from `-h` to `h`; each tetrahedron adds `h2` beyond it, so
/// the full model spans `2 * (h + h2)`. With `both_halves == false` only the
/// top half is built: the bottom ring and bottom apex collapse onto `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularPrism {
    r: f64,
    h: f64,
    h2: f64,
    n: usize,
    both_halves: bool,
}

impl TriangularPrism {
    /// Creates a prism whose end tetrahedra have height `h2`.
    ///
    /// # Arguments
    ///
    /// * `r` - Radius of the circle in the xz-plane the triangle is inscribed in
    /// * `h` - The body of the prism runs from `-h` to `h` along the y-axis
    /// * `h2` - Height of each end tetrahedron
    /// * `n` - Number of lines of latitude around the body
    /// * `both_halves` - Build the whole model, or only the part above `y = 0`
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is negative.
    pub fn from_height(r: f64, h: f64, h2: f64, n: i32, both_halves: bool) -> Result<Self> {
        let n = require_at_least("n", n, 0)?;
        Ok(Self {
            r,
            h,
            h2,
            n,
            both_halves,
        })
    }

    /// Creates a full prism whose end tetrahedra have slant angle `theta`
    /// (radians), so `h2 = r * tan(theta)`.
    ///
    /// `theta = 0` gives flat ends; `theta = atan(sqrt(2))` gives regular
    /// tetrahedra.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is negative.
    pub fn from_angle(r: f64, h: f64, theta: f64, n: i32) -> Result<Self> {
        Self::from_height(r, h, r * theta.tan(), n, true)
    }

    /// Creates a full prism with triangle side length `s` and a regular
    /// tetrahedron on each end.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is negative.
    pub fn from_side(s: f64, h: f64, n: i32) -> Result<Self> {
        Self::from_angle(s / 3.0_f64.sqrt(), h, 2.0_f64.sqrt().atan(), n)
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.r
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.h
    }

    #[must_use]
    pub fn apex_height(&self) -> f64 {
        self.h2
    }

    #[must_use]
    pub fn latitude_count(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn both_halves(&self) -> bool {
        self.both_halves
    }

    /// Heights of the latitude rings, evenly spaced strictly inside the body.
    #[allow(clippy::cast_precision_loss)]
    fn latitude_heights(&self) -> impl Iterator<Item = f64> + '_ {
        let slots = (self.n + 1) as f64;
        (1..=self.n).map(move |j| {
            let j = j as f64;
            if self.both_halves {
                -self.h + j * (2.0 * self.h / slots)
            } else {
                j * (self.h / slots)
            }
        })
    }
}

impl Default for TriangularPrism {
    /// Side length 0.5, body from -0.6 to 0.6, regular end tetrahedra.
    fn default() -> Self {
        let s: f64 = 0.5;
        let r = s / 3.0_f64.sqrt();
        Self {
            r,
            h: 0.6,
            h2: r * 2.0_f64.sqrt().atan().tan(),
            n: 0,
            both_halves: true,
        }
    }
}

impl Wireframe for TriangularPrism {
    fn name(&self) -> String {
        format!(
            "Triangular Prism({:.2},{:.2},{:.2},{})",
            self.r, self.h, self.h2, self.n
        )
    }

    fn execute(&self) -> Result<Mesh> {
        let (r, h, h2) = (self.r, self.h, self.h2);
        let mut mesh = Mesh::new(self.name());

        let bottom_y = if self.both_halves { -h } else { 0.0 };
        let top = mesh.add_vertices(equilateral_ring(r, h));
        let bottom = mesh.add_vertices(equilateral_ring(r, bottom_y));
        let top_apex = mesh.add_vertex(Point3::new(0.0, h + h2, 0.0));
        let bottom_apex = if self.both_halves {
            mesh.add_vertex(Point3::new(0.0, -h - h2, 0.0))
        } else {
            mesh.add_vertex(Point3::origin())
        };

        // top tetrahedron faces
        for i in 0..3 {
            mesh.add_edge(top_apex, top + i)?;
        }
        mesh.add_loop(&[top, top + 1, top + 2])?;
        // vertical edges
        for i in 0..3 {
            mesh.add_edge(top + i, bottom + i)?;
        }
        mesh.add_loop(&[bottom, bottom + 1, bottom + 2])?;
        // bottom tetrahedron faces
        for i in 0..3 {
            mesh.add_edge(bottom_apex, bottom + i)?;
        }

        for y in self.latitude_heights() {
            let ring = mesh.add_vertices(equilateral_ring(r, y));
            mesh.add_loop(&[ring, ring + 1, ring + 2])?;
        }

        log_generated(&mesh);
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ParameterError, WireframeError};
    use crate::math::TOLERANCE;
    use crate::mesh::LineSegment;

    fn prism(n: i32) -> Mesh {
        TriangularPrism::from_height(1.0, 2.0, 0.5, n, true)
            .unwrap()
            .execute()
            .unwrap()
    }

    #[test]
    fn body_has_8_vertices_and_15_edges() {
        let mesh = prism(0);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.edge_count(), 15);
    }

    #[test]
    fn counts_grow_by_three_per_ring() {
        for n in 0..6 {
            let mesh = prism(n);
            let n = usize::try_from(n).unwrap();
            assert_eq!(mesh.vertex_count(), 8 + 3 * n);
            assert_eq!(mesh.edge_count(), 15 + 3 * n);
        }
    }

    #[test]
    #[rustfmt::skip]
    fn edge_order_of_the_body() {
        let mesh = prism(0);
        let expected = [
            (6, 0), (6, 1), (6, 2),
            (0, 1), (1, 2), (2, 0),
            (0, 3), (1, 4), (2, 5),
            (3, 4), (4, 5), (5, 3),
            (7, 3), (7, 4), (7, 5),
        ];
        let expected: Vec<_> = expected
            .iter()
            .map(|&(a, b)| LineSegment::new(a, b))
            .collect();
        assert_eq!(mesh.edges(), expected.as_slice());
    }

    #[test]
    fn apexes_extend_beyond_body() {
        let mesh = prism(0);
        assert_eq!(*mesh.vertex(6).unwrap(), Point3::new(0.0, 2.5, 0.0));
        assert_eq!(*mesh.vertex(7).unwrap(), Point3::new(0.0, -2.5, 0.0));
        for i in 3..6 {
            assert!((mesh.vertex(i).unwrap().y + 2.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn rings_are_evenly_spaced_inside_body() {
        let mesh = prism(3);
        let ys: Vec<f64> = (8..mesh.vertex_count())
            .step_by(3)
            .map(|i| mesh.vertex(i).unwrap().y)
            .collect();
        let expected = [-1.0, 0.0, 1.0];
        for (y, e) in ys.iter().zip(expected) {
            assert!((y - e).abs() < TOLERANCE);
        }
        assert_eq!(mesh.edges()[15], LineSegment::new(8, 9));
        assert_eq!(mesh.edges()[17], LineSegment::new(10, 8));
    }

    #[test]
    fn half_model_is_cut_at_equator() {
        let mesh = TriangularPrism::from_height(1.0, 2.0, 0.5, 1, false)
            .unwrap()
            .execute()
            .unwrap();
        for i in 3..6 {
            assert!(mesh.vertex(i).unwrap().y.abs() < TOLERANCE);
        }
        assert_eq!(*mesh.vertex(7).unwrap(), Point3::origin());
        assert!((mesh.vertex(8).unwrap().y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_angle_puts_apexes_on_ring_planes() {
        let model = TriangularPrism::from_angle(1.0, 0.75, 0.0, 0).unwrap();
        assert!(model.apex_height().abs() < TOLERANCE);
        let mesh = model.execute().unwrap();
        assert!((mesh.vertex(6).unwrap().y - 0.75).abs() < TOLERANCE);
        assert!((mesh.vertex(7).unwrap().y + 0.75).abs() < TOLERANCE);
        assert_eq!(mesh.edge_count(), 15);
    }

    #[test]
    fn regular_end_tetrahedra_from_side() {
        let model = TriangularPrism::from_side(1.0, 0.5, 0).unwrap();
        let mesh = model.execute().unwrap();
        let apex = mesh.vertex(6).unwrap();
        for i in 0..3 {
            let side = (mesh.vertex(i).unwrap() - apex).norm();
            assert!((side - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn default_has_regular_end_tetrahedra() {
        let mesh = TriangularPrism::default().execute().unwrap();
        let top = mesh.vertex(6).unwrap().y;
        let bottom = mesh.vertex(7).unwrap().y;
        // h2 of a regular tetrahedron with side 0.5 is 0.5 * sqrt(2/3)
        let expected = 0.6 + 0.5 * (2.0_f64 / 3.0).sqrt();
        assert!((top - expected).abs() < 1e-9);
        assert!((bottom + expected).abs() < 1e-9);
    }

    #[test]
    fn negative_ring_count_fails() {
        let err = TriangularPrism::from_height(1.0, 1.0, 1.0, -1, true).unwrap_err();
        assert!(matches!(
            err,
            WireframeError::Parameter(ParameterError::InvalidParameter { parameter: "n", .. })
        ));
        assert!(TriangularPrism::from_angle(1.0, 1.0, 0.3, -4).is_err());
    }

    #[test]
    fn name_formats_parameters() {
        let model = TriangularPrism::from_height(1.0, 2.0, 0.5, 3, true).unwrap();
        assert_eq!(model.name(), "Triangular Prism(1.00,2.00,0.50,3)");
    }

    #[test]
    fn generation_is_repeatable() {
        let model = TriangularPrism::from_angle(0.7, 1.3, 0.4, 4).unwrap();
        assert_eq!(model.execute().unwrap(), model.execute().unwrap());
    }
}
