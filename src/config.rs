//! Game configuration
//!
//! Everything the world needs at construction time. Loaded from JSON by the
//! frame driver; missing fields fall back to the defaults in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::EnemyKind;

/// Relative spawn weights per enemy kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyWeights {
    pub asteroid: u32,
    pub beetlemorph: u32,
}

impl Default for EnemyWeights {
    fn default() -> Self {
        Self {
            asteroid: 3,
            beetlemorph: 1,
        }
    }
}

impl EnemyWeights {
    pub fn weight(&self, kind: EnemyKind) -> u32 {
        match kind {
            EnemyKind::Asteroid => self.asteroid,
            EnemyKind::Beetlemorph => self.beetlemorph,
        }
    }

    /// Sum of all weights, widened so large weights cannot overflow
    pub fn total(&self) -> u64 {
        EnemyKind::ALL.iter().map(|&k| u64::from(self.weight(k))).sum()
    }

    /// Map a roll in `0..total()` onto a kind. All-zero weights mean asteroids.
    pub fn pick(&self, roll: u64) -> EnemyKind {
        let mut acc = 0u64;
        for kind in EnemyKind::ALL {
            acc += u64::from(self.weight(kind));
            if roll < acc {
                return kind;
            }
        }
        EnemyKind::Asteroid
    }
}

/// World setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for spawn randomness
    pub seed: u64,

    // === Canvas ===
    pub width: f32,
    pub height: f32,

    // === Planet / player ===
    pub planet_radius: f32,
    pub player_radius: f32,

    // === Projectiles ===
    pub projectile_pool_size: usize,
    pub projectile_radius: f32,
    /// Pixels per tick
    pub projectile_speed: f32,

    // === Enemies ===
    pub enemy_pool_size: usize,
    pub enemy_radius: f32,
    /// Pixels per tick
    pub enemy_speed: f32,
    /// Milliseconds between spawns
    pub enemy_interval_ms: f32,
    pub enemy_weights: EnemyWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,

            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            planet_radius: PLANET_RADIUS,
            player_radius: PLAYER_RADIUS,

            projectile_pool_size: PROJECTILE_POOL_SIZE,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,

            enemy_pool_size: ENEMY_POOL_SIZE,
            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_interval_ms: ENEMY_INTERVAL_MS,
            enemy_weights: EnemyWeights::default(),
        }
    }
}

impl GameConfig {
    /// Canvas size as a bounds vector
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Canvas center, where the planet sits
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds() * 0.5
    }

    /// Parse from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp values that would break the simulation.
    ///
    /// Zero pool sizes are legal: the pool just never has a free slot.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.width.is_nan() || self.width <= 0.0 {
            log::warn!("width {} invalid, using {}", self.width, defaults.width);
            self.width = defaults.width;
        }
        if self.height.is_nan() || self.height <= 0.0 {
            log::warn!("height {} invalid, using {}", self.height, defaults.height);
            self.height = defaults.height;
        }
        for radius in [
            &mut self.planet_radius,
            &mut self.player_radius,
            &mut self.projectile_radius,
            &mut self.enemy_radius,
        ] {
            if radius.is_nan() || *radius < 0.0 {
                *radius = 0.0;
            }
        }
        // Stalled entities never leave play and would pin their pool full
        if self.enemy_speed.is_nan() || self.enemy_speed <= 0.0 {
            log::warn!(
                "enemy_speed {} invalid, using {}",
                self.enemy_speed,
                defaults.enemy_speed
            );
            self.enemy_speed = defaults.enemy_speed;
        }
        if self.projectile_speed.is_nan() || self.projectile_speed <= 0.0 {
            log::warn!(
                "projectile_speed {} invalid, using {}",
                self.projectile_speed,
                defaults.projectile_speed
            );
            self.projectile_speed = defaults.projectile_speed;
        }
        if self.enemy_interval_ms.is_nan() || self.enemy_interval_ms < 0.0 {
            log::warn!(
                "enemy_interval_ms {} invalid, using {}",
                self.enemy_interval_ms,
                defaults.enemy_interval_ms
            );
            self.enemy_interval_ms = defaults.enemy_interval_ms;
        }
        self
    }
}
