//! Surfaces
//!
//! A surface is one independently addressable UI instance: a component
//! graph plus a data model. The [`SurfaceStore`] is the authoritative state
//! the message processor mutates and the renderer reads.
//!
//! Every store operation is a total function over the current set of
//! surfaces. Messages come from an LLM that cannot be trusted to reference
//! ids correctly, so an operation targeting an unknown surface is a no-op
//! and the pipeline degrades to "render nothing for that surface".

use std::collections::HashMap;

use serde_json::Value;

use crate::data_model::DataModel;
use crate::message::Component;

/// Reserved component id designating a surface's rendering entry point.
pub const ROOT_COMPONENT_ID: &str = "root";

/// One UI surface: identity, component graph, and data model.
#[derive(Debug, Clone)]
pub struct Surface {
    /// Surface ID
    pub id: String,

    /// Which component vocabulary is in effect (informational)
    pub catalog_id: String,

    /// Component definitions by ID
    components: HashMap<String, Component>,

    /// The data tree components bind to
    data_model: DataModel,
}

impl Surface {
    /// Create an empty surface
    pub fn new(id: impl Into<String>, catalog_id: impl Into<String>) -> Self {
        Surface {
            id: id.into(),
            catalog_id: catalog_id.into(),
            components: HashMap::new(),
            data_model: DataModel::new(),
        }
    }

    /// Get a component by ID
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// The component designated as the rendering entry point, if any
    pub fn root_component(&self) -> Option<&Component> {
        self.component(ROOT_COMPONENT_ID)
    }

    /// Insert or fully overwrite a component at its id
    pub fn upsert_component(&mut self, component: Component) {
        self.components.insert(component.id.clone(), component);
    }

    /// All component IDs
    pub fn component_ids(&self) -> impl Iterator<Item = &String> {
        self.components.keys()
    }

    /// Number of components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// The surface's data model
    pub fn data_model(&self) -> &DataModel {
        &self.data_model
    }

    /// The surface's data model, mutable
    pub fn data_model_mut(&mut self) -> &mut DataModel {
        &mut self.data_model
    }
}

/// The set of live surfaces, keyed by surface id.
#[derive(Debug, Clone, Default)]
pub struct SurfaceStore {
    surfaces: HashMap<String, Surface>,
}

impl SurfaceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with an empty component map and data model.
    ///
    /// Re-creating an existing id resets it; there is no merge.
    pub fn create_surface(&mut self, surface_id: &str, catalog_id: &str) {
        self.surfaces
            .insert(surface_id.to_string(), Surface::new(surface_id, catalog_id));
    }

    /// Insert or fully overwrite components on an existing surface.
    ///
    /// Returns the ids that were written; an unknown surface is a no-op.
    pub fn upsert_components(&mut self, surface_id: &str, components: Vec<Component>) -> Vec<String> {
        let Some(surface) = self.surfaces.get_mut(surface_id) else {
            log::debug!("updateComponents for unknown surface {surface_id}, ignoring");
            return Vec::new();
        };
        let mut written = Vec::with_capacity(components.len());
        for component in components {
            written.push(component.id.clone());
            surface.upsert_component(component);
        }
        written
    }

    /// Set a value in an existing surface's data model.
    ///
    /// The root path replaces the whole tree. Returns whether the surface
    /// existed; an unknown surface is a no-op.
    pub fn set_data(&mut self, surface_id: &str, path: &str, value: Value) -> bool {
        let Some(surface) = self.surfaces.get_mut(surface_id) else {
            log::debug!("updateDataModel for unknown surface {surface_id}, ignoring");
            return false;
        };
        surface.data_model_mut().set(path, value);
        true
    }

    /// Remove a value from an existing surface's data model.
    ///
    /// Returns whether anything was removed.
    pub fn remove_data(&mut self, surface_id: &str, path: &str) -> bool {
        let Some(surface) = self.surfaces.get_mut(surface_id) else {
            log::debug!("updateDataModel for unknown surface {surface_id}, ignoring");
            return false;
        };
        surface.data_model_mut().remove(path)
    }

    /// Remove a surface entirely; unknown ids are a no-op.
    ///
    /// Returns whether the surface existed.
    pub fn delete_surface(&mut self, surface_id: &str) -> bool {
        self.surfaces.remove(surface_id).is_some()
    }

    /// Get a surface by ID
    pub fn get(&self, surface_id: &str) -> Option<&Surface> {
        self.surfaces.get(surface_id)
    }

    /// Get a mutable surface by ID
    pub fn get_mut(&mut self, surface_id: &str) -> Option<&mut Surface> {
        self.surfaces.get_mut(surface_id)
    }

    /// Whether a surface exists
    pub fn contains(&self, surface_id: &str) -> bool {
        self.surfaces.contains_key(surface_id)
    }

    /// All live surface IDs
    pub fn surface_ids(&self) -> impl Iterator<Item = &String> {
        self.surfaces.keys()
    }

    /// Number of live surfaces
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether no surfaces are live
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ComponentKind, TextProps};
    use serde_json::json;

    fn text_component(id: &str) -> Component {
        Component::new(id, ComponentKind::Text(TextProps::default()))
    }

    #[test]
    fn test_create_and_get() {
        let mut store = SurfaceStore::new();
        store.create_surface("main", "standard");

        let surface = store.get("main").unwrap();
        assert_eq!(surface.catalog_id, "standard");
        assert_eq!(surface.component_count(), 0);
    }

    #[test]
    fn test_recreate_resets() {
        let mut store = SurfaceStore::new();
        store.create_surface("main", "standard");
        store.upsert_components("main", vec![text_component("root")]);
        store.set_data("main", "/name", json!("Ann"));

        store.create_surface("main", "other");

        let surface = store.get("main").unwrap();
        assert_eq!(surface.catalog_id, "other");
        assert_eq!(surface.component_count(), 0);
        assert_eq!(surface.data_model().get("/name"), None);
    }

    #[test]
    fn test_upsert_overwrites_by_id() {
        let mut store = SurfaceStore::new();
        store.create_surface("main", "standard");

        store.upsert_components("main", vec![text_component("a")]);
        store.upsert_components(
            "main",
            vec![Component::new(
                "a",
                ComponentKind::Divider(Default::default()),
            )],
        );

        let surface = store.get("main").unwrap();
        assert_eq!(surface.component_count(), 1);
        assert!(matches!(
            surface.component("a").unwrap().kind,
            ComponentKind::Divider(_)
        ));
    }

    #[test]
    fn test_unknown_surface_is_noop() {
        let mut store = SurfaceStore::new();

        assert!(store.upsert_components("ghost", vec![text_component("a")]).is_empty());
        assert!(!store.set_data("ghost", "/x", json!(1)));
        assert!(!store.remove_data("ghost", "/x"));
        assert!(!store.delete_surface("ghost"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_data_root_and_subtree() {
        let mut store = SurfaceStore::new();
        store.create_surface("main", "standard");
        store.set_data("main", "/", json!({"a": 1, "b": 2}));
        store.set_data("main", "/b", json!(3));

        let model = store.get("main").unwrap().data_model();
        assert_eq!(model.get_number("/a"), Some(1.0));
        assert_eq!(model.get_number("/b"), Some(3.0));

        store.set_data("main", "/", json!({"c": 4}));
        let model = store.get("main").unwrap().data_model();
        assert_eq!(model.get("/a"), None);
        assert_eq!(model.get_number("/c"), Some(4.0));
    }

    #[test]
    fn test_delete_surface() {
        let mut store = SurfaceStore::new();
        store.create_surface("main", "standard");

        assert!(store.delete_surface("main"));
        assert!(!store.contains("main"));

        // Updates after deletion are no-ops.
        assert!(store.upsert_components("main", vec![text_component("a")]).is_empty());
    }
}
