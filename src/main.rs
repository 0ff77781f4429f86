//! Planet Defense headless driver
//!
//! Stands in for the browser frame loop: feeds the world 60 Hz timestamps,
//! plays an autopilot that tracks the closest enemy, and prints the final
//! snapshot as JSON.
//!
//! Usage: `planet-defense [config.json] [frames]`

use anyhow::{Context, Result};
use glam::Vec2;

use planet_defense::GameConfig;
use planet_defense::sim::World;
use planet_defense::{normalize_angle, polar_to_cartesian};

/// Frame length of a 60 Hz display
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Autopilot fires every this many frames
const FIRE_EVERY: u64 = 8;
const DEFAULT_FRAMES: u64 = 60 * 60;

fn load_config(path: Option<&str>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            let config = GameConfig::from_json(&json)
                .with_context(|| format!("parsing config {path}"))?;
            log::info!("Loaded config from {}", path);
            Ok(config)
        }
        None => {
            log::warn!("No config given, using defaults");
            Ok(GameConfig::default())
        }
    }
}

/// Where the autopilot points: the enemy closest to the planet, or a slow
/// sweep around the orbit when the sky is clear
fn autopilot_target(world: &World, frame: u64) -> Vec2 {
    let closest = world
        .enemies
        .iter_active()
        .filter(|(_, e)| !e.is_dying())
        .min_by(|(_, a), (_, b)| {
            let da = a.pos.distance_squared(world.planet.pos);
            let db = b.pos.distance_squared(world.planet.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    match closest {
        Some((_, enemy)) => enemy.pos,
        None => {
            let theta = normalize_angle(frame as f32 * 0.02);
            world.planet.pos + polar_to_cartesian(world.planet.radius * 3.0, theta)
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let frames = match args.get(1) {
        Some(n) => n
            .parse::<u64>()
            .with_context(|| format!("invalid frame count {n:?}"))?,
        None => DEFAULT_FRAMES,
    };

    let mut world = World::new(config);
    let mut shots = 0u64;
    let mut crashes = 0u64;

    for frame in 0..frames {
        let target = autopilot_target(&world, frame);
        world.set_pointer_target(target.x, target.y);
        if frame % FIRE_EVERY == 0 {
            world.trigger_shoot();
        }

        let report = world.frame(frame as f64 * FRAME_MS);
        shots += u64::from(report.fired);
        crashes += u64::from(report.enemies.crashed);

        if frame % 600 == 0 {
            log::info!(
                "frame {}: score {}, {} enemies, {} projectiles in flight",
                frame,
                world.score,
                world.enemies.active_count(),
                world.projectiles.active_count()
            );
        }
    }

    log::info!(
        "Done after {} frames: score {}, {} shots, {} crashes",
        frames,
        world.score,
        shots,
        crashes
    );

    let snapshot = serde_json::to_string_pretty(&world.snapshot())?;
    println!("{snapshot}");
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Planet Defense (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
