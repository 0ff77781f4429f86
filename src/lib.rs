//! Planet Defense - an orbit-and-shoot arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pools, aim math, collisions, world tick)
//! - `config`: Data-driven game setup
//!
//! Rendering, input wiring and the browser frame loop live outside this
//! crate. They talk to [`sim::World`] through its pointer/fire mutators and
//! the [`sim::WorldSnapshot`] it hands back.

pub mod config;
pub mod sim;

pub use config::GameConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 800.0;

    /// Planet sprite is 160x160, collision circle matches it
    pub const PLANET_RADIUS: f32 = 80.0;
    /// Player sprite is 80x80
    pub const PLAYER_RADIUS: f32 = 40.0;

    /// Projectile defaults
    pub const PROJECTILE_POOL_SIZE: usize = 20;
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Multiplier applied to the unit aim vector (pixels per tick)
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Enemy defaults
    pub const ENEMY_POOL_SIZE: usize = 20;
    pub const ENEMY_RADIUS: f32 = 40.0;
    /// Enemies home in at one pixel per tick
    pub const ENEMY_SPEED: f32 = 1.0;
    /// Milliseconds between spawn attempts
    pub const ENEMY_INTERVAL_MS: f32 = 1000.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
