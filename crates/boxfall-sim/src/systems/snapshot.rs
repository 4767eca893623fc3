//! Snapshot system: builds the render view of the scene.
//!
//! This system is read-only. It reads only positions and dimensions.

use boxfall_core::components::{Dimensions, Position};
use boxfall_core::enums::LoopState;
use boxfall_core::state::{EntityView, SceneSnapshot};
use boxfall_core::types::SimTime;

use crate::accessor;
use crate::scene::Scene;

/// Build a SceneSnapshot in scene order. Entities without both a
/// position and dimensions are not drawable and are left out.
pub fn build_snapshot(scene: &Scene, time: &SimTime, state: LoopState) -> SceneSnapshot {
    let world = scene.world();
    let entities = scene
        .entities()
        .iter()
        .filter_map(|&entity| {
            let pos = accessor::component::<Position>(world, entity)?;
            let dims = accessor::component::<Dimensions>(world, entity)?;
            Some(EntityView {
                id: scene.id_of(entity)?.to_string(),
                position: pos.current,
                width: dims.width,
                height: dims.height,
            })
        })
        .collect();

    SceneSnapshot {
        time: *time,
        state,
        entities,
    }
}
