//! Host loop thread: stands in for a window's per-frame callback.
//!
//! The simulation is moved into this thread. Lifecycle and input events
//! arrive over an `mpsc` channel and are applied between frames. Each
//! frame feeds a monotonic timestamp to the engine, which runs however
//! many fixed steps it owes, then hands one snapshot to the renderer.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use boxfall_sim::render::{RenderError, RenderSink};
use boxfall_sim::Simulation;

use crate::state::{HostEvent, HostSummary};

/// Nominal host refresh interval (60 Hz display).
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Result of a finished loop thread: the summary plus the renderer,
/// handed back to the caller.
pub type HostResult<R> = Result<(HostSummary, R), RenderError>;

/// Spawns the host loop in a new named thread.
pub fn spawn_host_loop<R>(
    sim: Simulation,
    renderer: R,
    events: mpsc::Receiver<HostEvent>,
    frame_interval: Duration,
) -> io::Result<JoinHandle<HostResult<R>>>
where
    R: RenderSink + Send + 'static,
{
    std::thread::Builder::new()
        .name("boxfall-host-loop".into())
        .spawn(move || run_host_loop(sim, renderer, events, frame_interval))
}

/// The host loop. Runs until Shutdown, channel disconnect or a render
/// failure.
fn run_host_loop<R: RenderSink>(
    mut sim: Simulation,
    mut renderer: R,
    events: mpsc::Receiver<HostEvent>,
    frame_interval: Duration,
) -> HostResult<R> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;
    let mut summary = HostSummary::default();
    let mut next_frame = Instant::now();

    log::info!("host loop started");
    loop {
        // 1. Apply everything that arrived since the last frame
        loop {
            match events.try_recv() {
                Ok(HostEvent::Input(command)) => sim.queue_command(command),
                Ok(HostEvent::Focus) => {
                    log::debug!("focus: resuming");
                    sim.resume(now_ms());
                }
                Ok(HostEvent::Blur) => {
                    log::debug!("blur: pausing");
                    sim.pause();
                }
                Ok(HostEvent::Resize(viewport)) => renderer.resize(viewport),
                Ok(HostEvent::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!(
                        "host loop stopped after {} frames, {} steps",
                        summary.frames,
                        summary.steps
                    );
                    return Ok((summary, renderer));
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Run the fixed steps this frame owes
        let report = sim.frame(now_ms());
        summary.frames += 1;
        summary.steps += u64::from(report.steps);
        for event in sim.drain_events() {
            log::trace!("sim event: {event:?}");
            summary.events += 1;
        }

        // 3. Draw once, after all steps
        let snapshot = sim.snapshot();
        renderer.render(&snapshot)?;
        summary.last_snapshot = snapshot;

        // 4. Sleep until the next frame
        next_frame += frame_interval;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else if now - next_frame > frame_interval * 2 {
            // Too far behind; the scheduler absorbs the gap
            next_frame = now;
        }
    }
}
