//! Headless world walk — streams chunks while a scripted player travels.
//!
//! Usage: cargo run --release --bin walk_world -- [OPTIONS]
//!
//! Options:
//!   --seed <SEED>       Random seed (default: 12345)
//!   --distance <BLOCKS> How far the player walks along +X (default: 400)
//!   --speed <B/S>       Walk speed in blocks per second (default: 5.0)
//!   --config <PATH>     Load WorldGenConfig from a JSON file
//!
//! Prints residency and block-count stats as the player moves, which makes
//! the generation/eviction throughput asymmetry easy to observe.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use glam::Vec3;

use blockworld::generation::WorldGenConfig;
use blockworld::render::NullRenderer;
use blockworld::session::Session;

fn main() {
    blockworld::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let seed = parse_u32_arg(&args, "--seed");
    let distance = parse_f32_arg(&args, "--distance").unwrap_or(400.0);
    let speed = parse_f32_arg(&args, "--speed").unwrap_or(5.0);

    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => match WorldGenConfig::from_file(&PathBuf::from(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => WorldGenConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("invalid config: {e}");
            std::process::exit(1);
        }
    };
    let mut renderer = NullRenderer::new();

    let start = Instant::now();
    let spawn = Vec3::new(0.0, 2.0, 0.0);
    let generated = session.populate_spawn(&mut renderer, spawn);
    log::info!(
        "spawn ready: {} chunks, {} blocks in {:?}",
        generated,
        session.block_count(),
        start.elapsed()
    );

    // Fixed 60 Hz simulation; the streamer throttles itself internally
    let tick = Duration::from_millis(16);
    let mut pos = spawn;
    let mut walked = 0.0f32;
    let mut last_report = 0.0f32;

    while walked < distance {
        let step = speed * tick.as_secs_f32();
        pos.x += step;
        walked += step;

        session.tick(&mut renderer, pos);

        if walked - last_report >= 50.0 {
            last_report = walked;
            log::info!(
                "walked {:.0} blocks: {} chunks resident, {} blocks, {} live primitives",
                walked,
                session.resident_chunks(),
                session.block_count(),
                renderer.live_count()
            );
        }

        std::thread::sleep(tick);
    }

    log::info!(
        "walk finished: {:.0} blocks in {:?}, {} chunks resident, {} blocks stored",
        walked,
        start.elapsed(),
        session.resident_chunks(),
        session.block_count()
    );
}

fn parse_f32_arg(args: &[String], name: &str) -> Option<f32> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn parse_u32_arg(args: &[String], name: &str) -> Option<u32> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn parse_str_arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
