use std::collections::BTreeMap;

use log::info;

use crate::gfx::{
    geometry::AABB,
    gizmos::handles::FIRST_USER_ID,
    picking::id::ObjectId,
};

use super::object::{Pose, SceneObject};

/// Objects placed in the editor, keyed by their pick ID
pub struct Scene {
    objects: BTreeMap<ObjectId, SceneObject>,
    next_id: ObjectId,
}

impl Scene {
    /// Creates an empty scene. The first object gets the first non-gizmo ID.
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            next_id: FIRST_USER_ID,
        }
    }

    /// Adds an object with the given object-space bounds and returns its ID.
    ///
    /// IDs increase monotonically and are never reused, even after removal.
    pub fn add_object(&mut self, name: &str, pose: Pose, bounds: AABB) -> ObjectId {
        let id = self.next_id;
        self.next_id = ObjectId(id.0 + 1);

        let name = self.ensure_unique_name(name);
        info!("Added object {} '{}'", id, name);
        self.objects.insert(id, SceneObject::new(id, name, pose, bounds));
        id
    }

    /// Adds an object whose bounds are taken from raw vertex positions
    pub fn add_object_from_vertices(&mut self, name: &str, pose: Pose, vertices: &[[f32; 3]]) -> ObjectId {
        self.add_object(name, pose, AABB::from_vertices(vertices))
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let removed = self.objects.remove(&id);
        if let Some(object) = &removed {
            info!("Removed object {} '{}'", id, object.name);
        }
        removed
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Gets immutable reference to an object by ID
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Gets mutable reference to an object by ID
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    /// Objects in ID order
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    /// Gets all object names for UI display
    pub fn get_object_names(&self) -> Vec<String> {
        self.objects.values().map(|obj| obj.name.clone()).collect()
    }

    /// Gets the total number of objects
    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// ID the next added object will receive
    pub fn next_id(&self) -> ObjectId {
        self.next_id
    }

    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.values().any(|obj| obj.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
