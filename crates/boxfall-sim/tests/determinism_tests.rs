use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use boxfall_sim::core::commands::PlayerCommand;
use boxfall_sim::core::state::Viewport;
use boxfall_sim::world_setup;
use boxfall_sim::{SimConfig, Simulation};

/// Host frame timestamps with seeded jitter, 5..40 ms apart.
fn frame_times(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut now = 0.0;
    (0..count)
        .map(|_| {
            now += rng.gen_range(5.0..40.0);
            now
        })
        .collect()
}

fn run_scatter(seed: u64, frames: &[f64]) -> String {
    let scene = world_setup::scatter_scene(seed, 40, Viewport::new(800, 600));
    let mut sim = Simulation::new(scene, SimConfig::default()).unwrap();
    sim.frame(0.0);
    for &t in frames {
        sim.frame(t);
    }
    serde_json::to_string(&sim.snapshot()).unwrap()
}

#[test]
fn identical_seed_and_frames_produce_identical_snapshots() {
    let frames = frame_times(99, 300);
    let run1 = run_scatter(2024, &frames);
    let run2 = run_scatter(2024, &frames);
    assert_eq!(run1, run2, "same seed and frames diverged");
}

#[test]
fn different_seeds_diverge() {
    let frames = frame_times(99, 60);
    assert_ne!(run_scatter(1, &frames), run_scatter(2, &frames));
}

#[test]
fn frame_pacing_does_not_change_the_result() {
    // Same total time, different host pacing: fixed steps make them equal
    let run = |timestamps: &[f64]| {
        let mut sim = Simulation::new(
            world_setup::scatter_scene(5, 25, Viewport::new(640, 480)),
            SimConfig {
                target_fps: 100.0,
                ..Default::default()
            },
        )
        .unwrap();
        sim.frame(0.0);
        for &t in timestamps {
            sim.frame(t);
        }
        serde_json::to_string(&sim.snapshot()).unwrap()
    };

    let steady: Vec<f64> = (1..=200).map(|i| i as f64 * 10.0).collect();
    let bursty: Vec<f64> = (1..=40).map(|i| i as f64 * 50.0).collect();
    assert_eq!(run(&steady), run(&bursty));
}

#[test]
fn scripted_input_replays_identically() {
    let script = |sim: &mut Simulation| {
        let mut t = 0.0;
        sim.frame(t);
        for i in 0..240 {
            match i {
                10 => sim.queue_command(PlayerCommand::Move { horizontal: 1.0 }),
                40 => sim.queue_command(PlayerCommand::Jump),
                90 => sim.queue_command(PlayerCommand::Move { horizontal: -1.0 }),
                150 => sim.queue_command(PlayerCommand::Move { horizontal: 0.0 }),
                _ => {}
            }
            t += 1000.0 / 60.0;
            sim.frame(t);
        }
        (serde_json::to_string(&sim.snapshot()).unwrap(), sim.drain_events())
    };

    let mut a = Simulation::new(world_setup::demo_scene().unwrap(), SimConfig::default()).unwrap();
    let mut b = Simulation::new(world_setup::demo_scene().unwrap(), SimConfig::default()).unwrap();
    assert_eq!(script(&mut a), script(&mut b));
}
