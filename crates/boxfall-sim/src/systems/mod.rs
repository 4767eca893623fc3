//! ECS systems that operate on the scene each fixed step.
//!
//! Systems are stateless functions over the world. They run in the fixed
//! order given by [`PIPELINE`]: collision's swept test needs movement to
//! have written this step's position, and its velocity gate must see the
//! gravity applied in the same step.

pub mod collision;
pub mod gravity;
pub mod movement;
pub mod snapshot;

use boxfall_core::commands::ControlState;

use crate::scene::Scene;
use collision::CollisionReport;

/// One pass of the per-step pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStage {
    Movement,
    Gravity,
    Collision,
}

/// Execution order of the fixed step.
pub const PIPELINE: [SystemStage; 3] = [
    SystemStage::Movement,
    SystemStage::Gravity,
    SystemStage::Collision,
];

/// Inputs shared by all stages of one step.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub elapsed_ms: f64,
    pub gravity: f32,
    pub controls: &'a ControlState,
}

impl StepContext<'_> {
    pub fn elapsed_secs(&self) -> f32 {
        (self.elapsed_ms / 1000.0) as f32
    }
}

impl SystemStage {
    pub fn name(&self) -> &'static str {
        match self {
            SystemStage::Movement => "movement",
            SystemStage::Gravity => "gravity",
            SystemStage::Collision => "collision",
        }
    }

    pub fn run(self, scene: &mut Scene, ctx: &StepContext<'_>, report: &mut CollisionReport) {
        match self {
            SystemStage::Movement => {
                movement::run(&mut scene.world, ctx.elapsed_secs(), ctx.controls)
            }
            SystemStage::Gravity => {
                gravity::run(&mut scene.world, ctx.elapsed_secs(), ctx.gravity)
            }
            SystemStage::Collision => {
                report.contacts.extend(collision::run(&mut scene.world, &scene.order).contacts)
            }
        }
    }
}

/// Run the whole pipeline once.
pub fn run_pipeline(scene: &mut Scene, ctx: &StepContext<'_>) -> CollisionReport {
    let mut report = CollisionReport::default();
    for stage in PIPELINE {
        log::trace!("step stage {}", stage.name());
        stage.run(scene, ctx, &mut report);
    }
    report
}
