//! Simulation engine: the core of the game.
//!
//! `Simulation` owns the scene, drives it through the fixed-timestep
//! scheduler, applies player commands at step boundaries and produces
//! `SceneSnapshot`s for the renderer. Completely headless, enabling
//! deterministic testing.

use std::collections::{HashSet, VecDeque};

use hecs::Entity;

use boxfall_core::commands::{ControlState, PlayerCommand};
use boxfall_core::enums::LoopState;
use boxfall_core::events::SimEvent;
use boxfall_core::state::SceneSnapshot;
use boxfall_core::types::SimTime;

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::scene::Scene;
use crate::scheduler::FixedTimestep;
use crate::systems::collision::CollisionReport;
use crate::systems::{self, StepContext};

/// Result of one host frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Fixed steps executed during the frame.
    pub steps: u32,
    /// Whole steps discarded by the catch-up cap.
    pub dropped: u32,
    /// Tick count after the frame.
    pub tick: u64,
}

/// Everything a fixed step mutates.
struct StepState {
    scene: Scene,
    time: SimTime,
    controls: ControlState,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    /// Body/obstacle pairs touching at the end of the last step.
    touching: HashSet<(Entity, Entity)>,
}

/// The simulation engine. Owns the scene and all sim state.
pub struct Simulation {
    state: StepState,
    scheduler: FixedTimestep,
    config: SimConfig,
}

impl Simulation {
    /// Create an engine over `scene`. The config is validated first.
    pub fn new(scene: Scene, config: SimConfig) -> Result<Self, ConfigError> {
        let scheduler = FixedTimestep::from_config(&config)?;
        log::debug!(
            "simulation created: {} entities, {:.3} ms step",
            scene.len(),
            config.frame_time_ms()
        );
        Ok(Self {
            state: StepState {
                scene,
                time: SimTime::default(),
                controls: ControlState::default(),
                command_queue: VecDeque::new(),
                events: Vec::new(),
                touching: HashSet::new(),
            },
            scheduler,
            config,
        })
    }

    /// Queue a player command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.state.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.state.command_queue.extend(commands);
    }

    /// Feed one host frame timestamp (ms, monotonic). Runs as many fixed
    /// steps as the elapsed time covers.
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameReport {
        let gravity = self.config.gravity;
        let state = &mut self.state;
        let advance = self
            .scheduler
            .advance(timestamp_ms, |elapsed_ms| state.step(elapsed_ms, gravity));

        if advance.dropped > 0 {
            self.state.events.push(SimEvent::StepsDropped {
                dropped: advance.dropped,
                tick: self.state.time.tick,
            });
        }

        FrameReport {
            steps: advance.steps,
            dropped: advance.dropped,
            tick: self.state.time.tick,
        }
    }

    /// Run exactly one step of `elapsed_ms`, bypassing the scheduler.
    /// Runs even while paused.
    pub fn step(&mut self, elapsed_ms: f64) {
        self.state.step(elapsed_ms, self.config.gravity);
    }

    /// Stop simulating. Frames are ignored until `resume`.
    pub fn pause(&mut self) {
        self.scheduler.pause();
    }

    /// Resume at host time `now_ms`. Time spent paused is not simulated.
    pub fn resume(&mut self, now_ms: f64) {
        self.scheduler.resume(now_ms);
    }

    /// Read-only render view of the current state.
    pub fn snapshot(&self) -> SceneSnapshot {
        systems::snapshot::build_snapshot(&self.state.scene, &self.state.time, self.scheduler.state())
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.state.events)
    }

    pub fn scene(&self) -> &Scene {
        &self.state.scene
    }

    /// Mutable scene access for spawning and despawning between frames.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.state.scene
    }

    pub fn time(&self) -> SimTime {
        self.state.time
    }

    pub fn state(&self) -> LoopState {
        self.scheduler.state()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Current input state, as the next step will see it before applying
    /// queued commands.
    pub fn controls(&self) -> ControlState {
        self.state.controls
    }
}

impl StepState {
    fn step(&mut self, elapsed_ms: f64, gravity: f32) {
        self.process_commands();
        self.scene.snapshot_previous_positions();

        let ctx = StepContext {
            elapsed_ms,
            gravity,
            controls: &self.controls,
        };
        let report = systems::run_pipeline(&mut self.scene, &ctx);
        self.time.advance(elapsed_ms);
        self.record_contacts(report);

        // A jump request lives for exactly one step
        self.controls.jump = false;
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.controls.apply(command);
        }
    }

    /// Emits a `Contact` event when a pair starts touching. A body resting
    /// on a surface overlaps it every step but is reported once.
    fn record_contacts(&mut self, report: CollisionReport) {
        let previous = std::mem::take(&mut self.touching);
        for contact in report.contacts {
            let pair = (contact.entity, contact.obstacle);
            self.touching.insert(pair);
            if previous.contains(&pair) {
                continue;
            }
            let (Some(entity), Some(obstacle)) = (
                self.scene.id_of(contact.entity),
                self.scene.id_of(contact.obstacle),
            ) else {
                continue;
            };
            log::debug!(
                "tick {}: {} hit {} ({:?}), resolved x={} y={}",
                self.time.tick,
                entity,
                obstacle,
                contact.obstacle_kind,
                contact.resolved.x,
                contact.resolved.y
            );
            self.events.push(SimEvent::Contact {
                entity: entity.to_string(),
                obstacle: obstacle.to_string(),
                obstacle_kind: contact.obstacle_kind,
                resolved_x: contact.resolved.x,
                resolved_y: contact.resolved.y,
                tick: self.time.tick,
            });
        }
    }
}
