pub mod error;
pub mod math;
pub mod mesh;
pub mod models;
pub mod scene;

pub use error::{Result, WireframeError};
pub use mesh::{LineSegment, Mesh, MeshCheck};
pub use models::{MeshMaker, TriangularPrism, TriangularPyramid, ViewFrustum, Wireframe};
pub use scene::{Model, ModelId, Scene};
