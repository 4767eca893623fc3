//! Scene factories for setting up the simulation.
//!
//! Builds live scenes from serializable definitions, and provides the
//! built-in demo level and seeded random crate scenes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use boxfall_core::components::*;
use boxfall_core::constants::*;
use boxfall_core::enums::ColliderKind;
use boxfall_core::scene::{ComponentDef, EntityDef, SceneDef};
use boxfall_core::state::Viewport;

use crate::assets::{AssetSource, MemoryAssets};
use crate::error::SceneError;
use crate::scene::Scene;

/// Build a live scene from its definition, in definition order.
/// Sprite sources are loaded through `assets` here, once.
pub fn build_scene(def: &SceneDef, assets: &dyn AssetSource) -> Result<Scene, SceneError> {
    let mut scene = Scene::new();
    for entity in &def.entities {
        let components = entity
            .components
            .iter()
            .map(|component| to_component(&entity.id, component, assets))
            .collect::<Result<Vec<_>, _>>()?;
        scene.spawn(entity.id.clone(), components)?;
    }
    log::debug!("built scene with {} entities", scene.len());
    Ok(scene)
}

fn to_component(
    entity: &str,
    def: &ComponentDef,
    assets: &dyn AssetSource,
) -> Result<Component, SceneError> {
    let component = match def {
        ComponentDef::Position { x, y } => Position::new(*x, *y).into(),
        ComponentDef::Velocity { x, y, max_x, max_y } => Velocity::new(*x, *y)
            .with_max(
                max_x.unwrap_or(f32::INFINITY),
                max_y.unwrap_or(f32::INFINITY),
            )
            .into(),
        ComponentDef::Dimensions { width, height } => Dimensions::new(*width, *height).into(),
        ComponentDef::Collider { kind } => Collider::new(*kind).into(),
        ComponentDef::Gravity { mass } => Gravity { mass: *mass }.into(),
        ComponentDef::Controllable { speed } => Controllable { speed: *speed }.into(),
        ComponentDef::Sprite { source } => {
            let image = assets
                .load_image(source)
                .map_err(|source| SceneError::Asset {
                    entity: entity.to_string(),
                    source,
                })?;
            Sprite { image }.into()
        }
    };
    Ok(component)
}

/// The demo level: a low ledge, a tall pillar and the player, who falls
/// onto the ledge. Obstacles come before the player in scene order.
pub fn demo_scene_def() -> SceneDef {
    SceneDef {
        entities: vec![
            EntityDef::new(
                "0",
                vec![
                    ComponentDef::Position { x: 75.0, y: 530.0 },
                    ComponentDef::Dimensions {
                        width: 50.0,
                        height: 25.0,
                    },
                    ComponentDef::Collider {
                        kind: ColliderKind::Rigid,
                    },
                ],
            ),
            EntityDef::new(
                "2",
                vec![
                    ComponentDef::Position { x: 150.0, y: 330.0 },
                    ComponentDef::Dimensions {
                        width: 50.0,
                        height: 200.0,
                    },
                    ComponentDef::Collider {
                        kind: ColliderKind::Rigid,
                    },
                ],
            ),
            EntityDef::new(
                "1",
                vec![
                    ComponentDef::Position { x: 100.0, y: 300.0 },
                    ComponentDef::Dimensions {
                        width: PLAYER_WIDTH,
                        height: PLAYER_HEIGHT,
                    },
                    ComponentDef::Velocity {
                        x: 0.0,
                        y: 0.0,
                        max_x: Some(PLAYER_MAX_SPEED_X),
                        max_y: Some(PLAYER_MAX_SPEED_Y),
                    },
                    ComponentDef::Controllable {
                        speed: PLAYER_CONTROL_SPEED,
                    },
                    ComponentDef::Gravity { mass: PLAYER_MASS },
                    ComponentDef::Collider {
                        kind: ColliderKind::Dynamic,
                    },
                ],
            ),
        ],
    }
}

/// Id of the controllable body in the demo level.
pub const DEMO_PLAYER_ID: &str = "1";

/// The demo level as a live scene. Uses no sprites.
pub fn demo_scene() -> Result<Scene, SceneError> {
    build_scene(&demo_scene_def(), &MemoryAssets::new())
}

/// Seeded scene of `count` falling crates above a rigid floor spanning
/// the viewport. Same seed and arguments give the same scene.
pub fn scatter_scene(seed: u64, count: usize, viewport: Viewport) -> Scene {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut scene = Scene::new();
    let width = viewport.width.max(1) as f32;
    let height = (viewport.height as f32).max(SCATTER_FLOOR_HEIGHT + SCATTER_CRATE_MAX * 2.0);
    let floor_top = height - SCATTER_FLOOR_HEIGHT;

    let floor: [Component; 3] = [
        Position::new(0.0, floor_top).into(),
        Dimensions::new(width, SCATTER_FLOOR_HEIGHT).into(),
        Collider::new(ColliderKind::Rigid).into(),
    ];
    if let Err(err) = scene.spawn("floor", floor) {
        log::error!("scatter floor rejected: {err}");
    }

    for i in 0..count {
        let size = rng.gen_range(SCATTER_CRATE_MIN..=SCATTER_CRATE_MAX);
        let x = rng.gen_range(0.0..(width - size).max(1.0));
        let y = rng.gen_range(0.0..(floor_top - size * 2.0).max(1.0));
        let drift = rng.gen_range(-SCATTER_MAX_DRIFT..=SCATTER_MAX_DRIFT);
        let mass = rng.gen_range(SCATTER_MASS_MIN..=SCATTER_MASS_MAX);

        let components: [Component; 5] = [
            Position::new(x, y).into(),
            Dimensions::new(size, size).into(),
            Velocity::new(drift, 0.0)
                .with_max(SCATTER_MAX_DRIFT, SCATTER_MAX_FALL_SPEED)
                .into(),
            Gravity { mass }.into(),
            Collider::new(ColliderKind::Dynamic).into(),
        ];
        if let Err(err) = scene.spawn(format!("crate-{i}"), components) {
            log::error!("scatter crate {i} rejected: {err}");
        }
    }

    log::debug!("scatter scene seed={seed}: {} entities", scene.len());
    scene
}
