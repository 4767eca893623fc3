//! Scene container: the hecs world plus the ordered entity list and the
//! string-id index.
//!
//! Entity order is spawn order. Despawning keeps the relative order of
//! the survivors. Collision applies obstacles in this order.

use std::collections::{HashMap, HashSet};

use hecs::{Entity, EntityBuilder, Ref, RefMut, World};

use boxfall_core::components::{Component, Position};
use boxfall_core::enums::ComponentTag;

use crate::accessor;
use crate::error::SceneError;

#[derive(Default)]
pub struct Scene {
    pub(crate) world: World,
    pub(crate) order: Vec<Entity>,
    ids: HashMap<String, Entity>,
    names: HashMap<Entity, String>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an entity with at most one component per tag.
    ///
    /// Rejects a live duplicate id and a repeated tag; nothing is spawned
    /// on error.
    pub fn spawn(
        &mut self,
        id: impl Into<String>,
        components: impl IntoIterator<Item = Component>,
    ) -> Result<Entity, SceneError> {
        let id = id.into();
        if self.ids.contains_key(&id) {
            return Err(SceneError::DuplicateEntity(id));
        }

        let mut seen = HashSet::new();
        let mut builder = EntityBuilder::new();
        for component in components {
            let tag = component.tag();
            if !seen.insert(tag) {
                return Err(SceneError::DuplicateComponent { entity: id, tag });
            }
            match component {
                Component::Position(c) => builder.add(c),
                Component::Velocity(c) => builder.add(c),
                Component::Dimensions(c) => builder.add(c),
                Component::Collider(c) => builder.add(c),
                Component::Gravity(c) => builder.add(c),
                Component::Controllable(c) => builder.add(c),
                Component::Sprite(c) => builder.add(c),
            };
        }

        let entity = self.world.spawn(builder.build());
        self.order.push(entity);
        self.ids.insert(id.clone(), entity);
        self.names.insert(entity, id);
        Ok(entity)
    }

    /// Remove an entity by id. Returns false if no such entity exists.
    pub fn despawn(&mut self, id: &str) -> bool {
        let Some(entity) = self.ids.remove(id) else {
            return false;
        };
        self.names.remove(&entity);
        self.order.retain(|&e| e != entity);
        self.world.despawn(entity).is_ok()
    }

    pub fn entity(&self, id: &str) -> Option<Entity> {
        self.ids.get(id).copied()
    }

    pub fn id_of(&self, entity: Entity) -> Option<&str> {
        self.names.get(&entity).map(String::as_str)
    }

    /// Typed component lookup by entity id.
    pub fn get<T: hecs::Component>(&self, id: &str) -> Option<Ref<'_, T>> {
        accessor::component::<T>(&self.world, self.entity(id)?)
    }

    pub fn get_mut<T: hecs::Component>(&self, id: &str) -> Option<RefMut<'_, T>> {
        accessor::component_mut::<T>(&self.world, self.entity(id)?)
    }

    pub fn has(&self, id: &str, tag: ComponentTag) -> bool {
        self.entity(id)
            .is_some_and(|entity| accessor::has_tag(&self.world, entity, tag))
    }

    /// Entities in scene order.
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    /// Entity ids in scene order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().filter_map(|&e| self.id_of(e))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Read-only view of the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Copy every position's current value into `previous`.
    /// Called once at the start of each fixed step, before any system.
    pub fn snapshot_previous_positions(&mut self) {
        for (_entity, pos) in self.world.query_mut::<&mut Position>() {
            pos.snapshot();
        }
    }
}
