//! Per-frame simulation tick
//!
//! The order is fixed so that a recorded input/delta stream replays exactly:
//! player -> projectiles -> enemies -> spawner.

use glam::Vec2;

use super::enemy::EnemyTickSummary;
use super::state::World;

/// Input latched between ticks
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in canvas coordinates
    pub pointer: Vec2,
    /// One-shot fire request (click/tap/key)
    pub fire: bool,
}

/// Turns frame-driver timestamps into deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    /// Milliseconds since the previous call; zero on the first call or if
    /// the timestamp went backwards.
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_timestamp {
            Some(last) => (timestamp_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        dt
    }
}

/// What one tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A shot left the barrel this tick
    pub fired: bool,
    /// Index of the enemy slot activated this tick
    pub spawned: Option<usize>,
    pub enemies: EnemyTickSummary,
}

/// Advance the world by one frame of `dt_ms` milliseconds
pub fn tick(world: &mut World, dt_ms: f32) -> TickReport {
    let mut report = TickReport::default();
    world.time_ticks += 1;

    let fire = std::mem::take(&mut world.input.fire);
    world.player.update(world.input.pointer, &world.planet);
    if fire {
        report.fired = world.player.shoot(&mut world.projectiles);
    }

    let bounds = world.bounds();
    world.projectiles.tick(bounds);

    report.enemies = world.enemies.tick(
        &world.planet.circle(),
        &world.player.circle(),
        &mut world.projectiles,
    );
    world.score += report.enemies.score;

    if world.spawner.tick(dt_ms) {
        report.spawned = world.spawn_enemy();
    }

    report
}

impl World {
    /// Advance one tick by an explicit delta
    pub fn tick(&mut self, dt_ms: f32) -> TickReport {
        tick(self, dt_ms)
    }

    /// Advance one tick from a frame-driver timestamp
    pub fn frame(&mut self, timestamp_ms: f64) -> TickReport {
        let dt = self.clock.delta(timestamp_ms);
        tick(self, dt)
    }
}
