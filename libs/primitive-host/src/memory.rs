//! In-memory scene used by tests and headless embedders.
//!
//! Objects are stored in creation order. Removing one leaves an empty slot,
//! so the handles of the others stay valid.

use crate::error::HostError;
use crate::scene::{ObjectData, ObjectHandle, SceneHost};
use glam::{DQuat, DVec3};

/// One object of a [`MemoryScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub data: ObjectData,
    pub location: DVec3,
    pub rotation: DQuat,
    pub linked: bool,
    /// Number of redraw requests received.
    pub redraws: u32,
}

/// Scene kept entirely in memory.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use primitive_host::{MemoryScene, ObjectData, SceneHost};
///
/// let mut scene = MemoryScene::default().with_cursor(DVec3::new(1.0, 2.0, 3.0), Default::default());
/// let a = scene.create_mesh_object("Cube", ObjectData::Empty);
/// let b = scene.create_mesh_object("Cube", ObjectData::Empty);
/// assert_eq!(scene.object(b).unwrap().name, "Cube.001");
/// assert_eq!(scene.cursor_location(), DVec3::new(1.0, 2.0, 3.0));
/// # let _ = a;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    objects: Vec<Option<SceneObject>>,
    cursor_location: DVec3,
    cursor_rotation: DQuat,
}

impl MemoryScene {
    /// Creates an empty scene with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the 3D cursor.
    pub fn with_cursor(mut self, location: DVec3, rotation: DQuat) -> Self {
        self.cursor_location = location;
        self.cursor_rotation = rotation;
        self
    }

    /// Moves the 3D cursor.
    pub fn set_cursor(&mut self, location: DVec3, rotation: DQuat) {
        self.cursor_location = location;
        self.cursor_rotation = rotation;
    }

    /// Number of objects, linked or not.
    pub fn len(&self) -> usize {
        self.live().count()
    }

    /// Returns true if the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Object by handle.
    pub fn object(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        self.objects.get(handle.0 as usize).and_then(Option::as_ref)
    }

    /// Object by exact name.
    pub fn find(&self, name: &str) -> Option<ObjectHandle> {
        self.objects
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|o| o.name == name))
            .map(|i| ObjectHandle(i as u32))
    }

    fn live(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().flatten()
    }

    fn object_mut(&mut self, handle: ObjectHandle) -> Result<&mut SceneObject, HostError> {
        self.objects
            .get_mut(handle.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(HostError::UnknownObject(handle))
    }

    /// `name`, or `name.NNN` with the first free suffix.
    fn unique_name(&self, name: &str) -> String {
        let taken = |candidate: &str| self.live().any(|o| o.name == candidate);
        if !taken(name) {
            return name.to_string();
        }
        (1..)
            .map(|n| format!("{}.{:03}", name, n))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| name.to_string())
    }
}

impl SceneHost for MemoryScene {
    fn create_mesh_object(&mut self, name: &str, data: ObjectData) -> ObjectHandle {
        let name = self.unique_name(name);
        self.objects.push(Some(SceneObject {
            name,
            data,
            location: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            linked: false,
            redraws: 0,
        }));
        ObjectHandle((self.objects.len() - 1) as u32)
    }

    fn remove_object(&mut self, handle: ObjectHandle) -> Result<ObjectData, HostError> {
        self.objects
            .get_mut(handle.0 as usize)
            .and_then(Option::take)
            .map(|o| o.data)
            .ok_or(HostError::UnknownObject(handle))
    }

    fn link(&mut self, handle: ObjectHandle) -> Result<(), HostError> {
        self.object_mut(handle)?.linked = true;
        Ok(())
    }

    fn cursor_location(&self) -> DVec3 {
        self.cursor_location
    }

    fn cursor_rotation(&self) -> DQuat {
        self.cursor_rotation
    }

    fn set_transform(
        &mut self,
        handle: ObjectHandle,
        location: DVec3,
        rotation: DQuat,
    ) -> Result<(), HostError> {
        let object = self.object_mut(handle)?;
        object.location = location;
        object.rotation = rotation;
        Ok(())
    }

    fn mark_dirty(&mut self, handle: ObjectHandle) -> Result<(), HostError> {
        self.object_mut(handle)?.redraws += 1;
        Ok(())
    }

    fn object_data(&self, handle: ObjectHandle) -> Result<&ObjectData, HostError> {
        self.object(handle)
            .map(|o| &o.data)
            .ok_or(HostError::UnknownObject(handle))
    }

    fn object_data_mut(&mut self, handle: ObjectHandle) -> Result<&mut ObjectData, HostError> {
        Ok(&mut self.object_mut(handle)?.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_objects_are_unlinked_at_origin() {
        let mut scene = MemoryScene::new();
        let handle = scene.create_mesh_object("Thing", ObjectData::Empty);
        let object = scene.object(handle).unwrap();
        assert!(!object.linked);
        assert_eq!(object.location, DVec3::ZERO);
        assert_eq!(object.redraws, 0);
    }

    #[test]
    fn test_names_are_made_unique() {
        let mut scene = MemoryScene::new();
        scene.create_mesh_object("Torus", ObjectData::Empty);
        scene.create_mesh_object("Torus", ObjectData::Empty);
        scene.create_mesh_object("Torus", ObjectData::Empty);
        assert!(scene.find("Torus.002").is_some());
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_unknown_handle() {
        let mut scene = MemoryScene::new();
        let missing = ObjectHandle(4);
        assert_eq!(scene.link(missing), Err(HostError::UnknownObject(missing)));
        assert!(scene.object_data(missing).is_err());
        assert!(scene.mark_dirty(missing).is_err());
    }

    #[test]
    fn test_remove_keeps_other_handles() {
        let mut scene = MemoryScene::new();
        let first = scene.create_mesh_object("Cube", ObjectData::Empty);
        let second = scene.create_mesh_object("Cube", ObjectData::Empty);
        assert_eq!(scene.remove_object(first), Ok(ObjectData::Empty));

        assert_eq!(scene.len(), 1);
        assert!(scene.object(first).is_none());
        assert_eq!(scene.object(second).unwrap().name, "Cube.001");
        assert_eq!(scene.remove_object(first), Err(HostError::UnknownObject(first)));

        // the freed name is reused
        let third = scene.create_mesh_object("Cube", ObjectData::Empty);
        assert_eq!(scene.object(third).unwrap().name, "Cube");
    }

    #[test]
    fn test_transform_and_dirty() {
        let mut scene = MemoryScene::new();
        let handle = scene.create_mesh_object("Thing", ObjectData::Empty);
        let rotation = DQuat::from_rotation_z(1.0);
        scene.set_transform(handle, DVec3::X, rotation).unwrap();
        scene.mark_dirty(handle).unwrap();
        scene.mark_dirty(handle).unwrap();
        let object = scene.object(handle).unwrap();
        assert_eq!(object.location, DVec3::X);
        assert_eq!(object.rotation, rotation);
        assert_eq!(object.redraws, 2);
    }
}
