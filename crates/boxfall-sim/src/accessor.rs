//! Component lookup: "the component of type `T` on entity `E`, or none".
//!
//! Every system queries through these helpers or through hecs queries.
//! A missing component, or an entity that no longer exists, is not an
//! error: callers treat `None` as "this pass does not apply".

use hecs::{Entity, Ref, RefMut, World};

use boxfall_core::components::*;
use boxfall_core::enums::ComponentTag;

/// Shared borrow of `T` on `entity`, if present.
pub fn component<T: hecs::Component>(world: &World, entity: Entity) -> Option<Ref<'_, T>> {
    world.get::<&T>(entity).ok()
}

/// Exclusive borrow of `T` on `entity`, if present.
pub fn component_mut<T: hecs::Component>(world: &World, entity: Entity) -> Option<RefMut<'_, T>> {
    world.get::<&mut T>(entity).ok()
}

/// Whether `entity` carries a component with the given tag.
pub fn has_tag(world: &World, entity: Entity, tag: ComponentTag) -> bool {
    let Ok(entity) = world.entity(entity) else {
        return false;
    };
    match tag {
        ComponentTag::Position => entity.has::<Position>(),
        ComponentTag::Velocity => entity.has::<Velocity>(),
        ComponentTag::Dimensions => entity.has::<Dimensions>(),
        ComponentTag::Collider => entity.has::<Collider>(),
        ComponentTag::Gravity => entity.has::<Gravity>(),
        ComponentTag::Controllable => entity.has::<Controllable>(),
        ComponentTag::Sprite => entity.has::<Sprite>(),
    }
}

/// Tags carried by `entity`, in `ComponentTag` order.
pub fn tags(world: &World, entity: Entity) -> Vec<ComponentTag> {
    ComponentTag::ALL
        .into_iter()
        .filter(|&tag| has_tag(world, entity, tag))
        .collect()
}
