use boxfall_sim::core::enums::LoopState;
use boxfall_sim::{Scene, SimConfig, Simulation};

fn sim_at(fps: f64) -> Simulation {
    Simulation::new(
        Scene::new(),
        SimConfig {
            target_fps: fps,
            ..Default::default()
        },
    )
    .unwrap()
}

#[test]
fn irregular_frames_sum_to_whole_steps() {
    let mut sim = sim_at(100.0);
    let mut total = 0;
    for t in [0.0, 3.0, 7.0, 15.0, 31.0, 32.0, 60.0] {
        total += sim.frame(t).steps;
    }
    assert_eq!(total, 6);
    assert_eq!(sim.time().tick, 6);
    assert_eq!(sim.time().elapsed_ms, 60.0);
}

#[test]
fn long_blur_is_never_simulated() {
    let mut sim = sim_at(100.0);
    sim.frame(0.0);
    sim.frame(25.0);
    assert_eq!(sim.time().tick, 2);

    sim.pause();
    for t in [1_000.0, 50_000.0, 3_600_000.0] {
        let report = sim.frame(t);
        assert_eq!(report.steps, 0);
        assert_eq!(report.tick, 2);
    }

    // The 5 ms banked before the pause survive it
    sim.resume(3_600_000.0);
    assert_eq!(sim.state(), LoopState::Running);
    assert_eq!(sim.frame(3_600_005.0).steps, 1);
    assert_eq!(sim.time().tick, 3);
}

#[test]
fn uncapped_catch_up_runs_every_step() {
    let mut sim = sim_at(100.0);
    sim.frame(0.0);
    let report = sim.frame(2_000.0);
    assert_eq!(report.steps, 200);
    assert_eq!(report.dropped, 0);
    assert!(sim.drain_events().is_empty());
}

#[test]
fn pause_is_idempotent() {
    let mut sim = sim_at(60.0);
    sim.frame(0.0);
    sim.pause();
    sim.pause();
    assert_eq!(sim.state(), LoopState::Paused);
    sim.resume(100.0);
    sim.resume(500.0);
    // The second resume is ignored; the clock restarted at 100
    assert_eq!(sim.frame(120.0).steps, 1);
}
