use slotmap::SlotMap;

use crate::error::{MeshError, Result};
use crate::mesh::Mesh;
use crate::models::Wireframe;

slotmap::new_key_type! {
    /// Unique identifier for a model in a [`Scene`].
    pub struct ModelId;
}

/// A generated mesh placed in a scene.
#[derive(Debug, Clone)]
pub struct Model {
    /// The model's geometry, with local 0-based indices.
    pub mesh: Mesh,
    /// Whether the model takes part in [`Scene::flatten`].
    pub visible: bool,
}

impl Model {
    /// Wraps a mesh as a visible model.
    #[must_use]
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            visible: true,
        }
    }
}

/// Arena that owns the models of a scene.
///
/// Each model keeps its own local vertex indices. Offsetting happens only when
/// the scene is flattened into a single mesh.
#[derive(Debug, Default)]
pub struct Scene {
    models: SlotMap<ModelId, Model>,
    order: Vec<ModelId>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mesh as a visible model and returns its ID.
    pub fn insert(&mut self, mesh: Mesh) -> ModelId {
        let id = self.models.insert(Model::new(mesh));
        self.order.push(id);
        id
    }

    /// Generates a model's mesh and inserts it.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails; the scene is left unchanged.
    pub fn insert_wireframe(&mut self, model: &impl Wireframe) -> Result<ModelId> {
        let mesh = model.execute()?;
        Ok(self.insert(mesh))
    }

    /// Returns a reference to the model, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not in the scene.
    pub fn model(&self, id: ModelId) -> Result<&Model> {
        Ok(self.models.get(id).ok_or(MeshError::ModelNotFound)?)
    }

    /// Returns a mutable reference to the model, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not in the scene.
    pub fn model_mut(&mut self, id: ModelId) -> Result<&mut Model> {
        Ok(self.models.get_mut(id).ok_or(MeshError::ModelNotFound)?)
    }

    /// Shows or hides a model.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not in the scene.
    pub fn set_visible(&mut self, id: ModelId, visible: bool) -> Result<()> {
        self.model_mut(id)?.visible = visible;
        Ok(())
    }

    /// Removes a model and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not in the scene.
    pub fn remove(&mut self, id: ModelId) -> Result<Model> {
        let model = self.models.remove(id).ok_or(MeshError::ModelNotFound)?;
        self.order.retain(|&other| other != id);
        Ok(model)
    }

    /// Number of models in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterates over the models in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ModelId, &Model)> {
        self.order
            .iter()
            .filter_map(|&id| self.models.get(id).map(|model| (id, model)))
    }

    /// Merges every visible model, in insertion order, into one mesh.
    #[must_use]
    pub fn flatten(&self, name: &str) -> Mesh {
        let mut combined = Mesh::new(name);
        for (_, model) in self.iter().filter(|(_, model)| model.visible) {
            combined.append(&model.mesh);
        }
        tracing::debug!(
            scene = name,
            models = self.len(),
            vertices = combined.vertex_count(),
            edges = combined.edge_count(),
            "flattened scene"
        );
        combined
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::WireframeError;
    use crate::mesh::LineSegment;
    use crate::models::{TriangularPyramid, ViewFrustum};

    #[test]
    fn flatten_offsets_later_models() {
        let mut scene = Scene::new();
        scene.insert_wireframe(&TriangularPyramid::new(1.0, 1.0)).unwrap();
        scene.insert_wireframe(&ViewFrustum::default()).unwrap();

        let mesh = scene.flatten("scene");
        assert_eq!(mesh.vertex_count(), 4 + 8);
        assert_eq!(mesh.edge_count(), 6 + 12);
        // first frustum edge (0, 1) lands after the pyramid's 4 vertices
        assert_eq!(mesh.edges()[6], LineSegment::new(4, 5));
        assert!(mesh.check().is_ok());
    }

    #[test]
    fn hidden_models_are_skipped() {
        let mut scene = Scene::new();
        let pyramid = scene.insert_wireframe(&TriangularPyramid::new(1.0, 1.0)).unwrap();
        scene.insert_wireframe(&ViewFrustum::default()).unwrap();
        scene.set_visible(pyramid, false).unwrap();

        let mesh = scene.flatten("scene");
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.edges()[0], LineSegment::new(0, 1));
    }

    #[test]
    fn removed_model_is_gone() {
        let mut scene = Scene::new();
        let id = scene.insert(Mesh::new("empty"));
        assert_eq!(scene.len(), 1);
        let model = scene.remove(id).unwrap();
        assert_eq!(model.mesh.name(), "empty");
        assert!(scene.is_empty());
        assert!(matches!(
            scene.model(id),
            Err(WireframeError::Mesh(MeshError::ModelNotFound))
        ));
        assert!(scene.remove(id).is_err());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut scene = Scene::new();
        let a = scene.insert(Mesh::new("a"));
        let b = scene.insert(Mesh::new("b"));
        let c = scene.insert(Mesh::new("c"));
        scene.remove(b).unwrap();
        let ids: Vec<_> = scene.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, c]);
    }
}
