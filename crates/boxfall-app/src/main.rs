use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use boxfall_app::host::{self, FRAME_INTERVAL};
use boxfall_app::renderer::{TextFormat, TextRenderer};
use boxfall_app::state::HostEvent;
use boxfall_core::commands::PlayerCommand;
use boxfall_core::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use boxfall_core::scene::{ComponentDef, SceneDef};
use boxfall_core::state::Viewport;
use boxfall_sim::assets::MemoryAssets;
use boxfall_sim::{world_setup, Scene, SimConfig, Simulation};

/// Headless fixed-timestep box physics.
#[derive(Parser, Debug)]
#[command(name = "boxfall", version)]
struct Args {
    /// Scene definition (JSON). Defaults to the demo level.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Simulation config (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the fixed step rate.
    #[arg(long)]
    fps: Option<f64>,

    /// Wall-clock seconds to run before shutting down.
    #[arg(long, default_value_t = 3.0)]
    seconds: f64,

    /// Print snapshots as JSON lines instead of plain text.
    #[arg(long)]
    json: bool,

    /// Generate a seeded crate scene instead of the demo level.
    #[arg(long, conflicts_with = "scene")]
    seed: Option<u64>,

    /// Crate count for generated scenes.
    #[arg(long, default_value_t = 50)]
    crates: usize,

    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let viewport = Viewport::new(args.width, args.height);

    let config = load_config(&args)?;
    let scene = load_scene(&args, viewport)?;
    log::info!(
        "starting: {} entities at {} steps/s",
        scene.len(),
        config.target_fps
    );

    let sim = Simulation::new(scene, config).context("invalid simulation config")?;
    let format = if args.json {
        TextFormat::JsonLines
    } else {
        TextFormat::Plain
    };
    let renderer = TextRenderer::new(std::io::stdout(), format, viewport)
        .context("failed to create renderer")?;

    let (tx, rx) = mpsc::channel();
    let handle = host::spawn_host_loop(sim, renderer, rx, FRAME_INTERVAL)
        .context("failed to spawn host loop thread")?;

    run_script(&tx, Duration::try_from_secs_f64(args.seconds).unwrap_or_default());
    // The loop may already have stopped on a render error
    let _ = tx.send(HostEvent::Shutdown);

    let (summary, _) = handle
        .join()
        .map_err(|_| anyhow!("host loop thread panicked"))?
        .context("rendering failed")?;
    log::info!(
        "done: {} frames, {} steps, {} events, final tick {}",
        summary.frames,
        summary.steps,
        summary.events,
        summary.last_snapshot.time.tick
    );
    Ok(())
}

/// Scripted stand-in for a player: run right, jump, lose and regain
/// focus, run left, stop.
fn run_script(tx: &mpsc::Sender<HostEvent>, total: Duration) {
    let beat = total / 5;
    let script = [
        HostEvent::Input(PlayerCommand::Move { horizontal: 1.0 }),
        HostEvent::Input(PlayerCommand::Jump),
        HostEvent::Blur,
        HostEvent::Focus,
        HostEvent::Input(PlayerCommand::Move { horizontal: -1.0 }),
    ];
    for event in script {
        if tx.send(event).is_err() {
            return;
        }
        std::thread::sleep(beat);
    }
    let _ = tx.send(HostEvent::Input(PlayerCommand::Move { horizontal: 0.0 }));
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_json(&read(path)?)
            .with_context(|| format!("invalid config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(fps) = args.fps {
        config.target_fps = fps;
    }
    config.validate()?;
    Ok(config)
}

fn load_scene(args: &Args, viewport: Viewport) -> Result<Scene> {
    if let Some(seed) = args.seed {
        return Ok(world_setup::scatter_scene(seed, args.crates, viewport));
    }
    let Some(path) = &args.scene else {
        return Ok(world_setup::demo_scene()?);
    };

    let def = SceneDef::from_json(&read(path)?)
        .with_context(|| format!("invalid scene {}", path.display()))?;
    let assets = placeholder_assets(&def);
    let scene = world_setup::build_scene(&def, &assets)
        .with_context(|| format!("failed to build scene {}", path.display()))?;
    Ok(scene)
}

/// One grey placeholder image per sprite source named in the scene.
fn placeholder_assets(def: &SceneDef) -> MemoryAssets {
    let mut assets = MemoryAssets::new();
    for entity in &def.entities {
        for component in &entity.components {
            if let ComponentDef::Sprite { source } = component {
                assets.insert_placeholder(source.clone(), 1, 1, [128, 128, 128, 255]);
            }
        }
    }
    assets
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
