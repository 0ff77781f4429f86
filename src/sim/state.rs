//! World state
//!
//! The world exclusively owns the planet, the player, both pools and the
//! spawner. Input only ever touches the latched [`TickInput`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::enemy::{EnemyKind, EnemyPool};
use super::player::{Planet, Player};
use super::projectile::ProjectilePool;
use super::spawner::Spawner;
use super::tick::{FrameClock, TickInput};
use crate::config::GameConfig;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub planet: Planet,
    pub player: Player,
    pub projectiles: ProjectilePool,
    pub enemies: EnemyPool,
    pub spawner: Spawner,
    /// Latched input, consumed at the start of each tick
    pub input: TickInput,
    /// Enemies shot down, weighted by kind
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Collision-circle overlay for the renderer
    pub debug: bool,
    pub(crate) clock: FrameClock,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Build a fresh world from `config`
    pub fn new(config: GameConfig) -> Self {
        let config = config.validated();
        let center = config.center();
        let planet = Planet::new(center, config.planet_radius);
        let mut player = Player::new(config.player_radius, config.projectile_speed);
        // Start facing straight up until the pointer moves
        let pointer = center - Vec2::new(0.0, center.y);
        player.update(pointer, &planet);

        log::info!(
            "World {}x{} seed {} ({} projectiles, {} enemies, spawn every {} ms)",
            config.width,
            config.height,
            config.seed,
            config.projectile_pool_size,
            config.enemy_pool_size,
            config.enemy_interval_ms
        );

        Self {
            planet,
            player,
            projectiles: ProjectilePool::new(config.projectile_pool_size, config.projectile_radius),
            enemies: EnemyPool::new(config.enemy_pool_size, config.enemy_radius),
            spawner: Spawner::new(config.enemy_interval_ms),
            input: TickInput {
                pointer,
                fire: false,
            },
            score: 0,
            time_ticks: 0,
            debug: false,
            clock: FrameClock::default(),
            rng: Pcg32::seed_from_u64(config.seed),
            config,
        }
    }

    /// Pointer moved (last writer wins)
    pub fn set_pointer_target(&mut self, x: f32, y: f32) {
        self.input.pointer = Vec2::new(x, y);
    }

    /// Request one shot on the next tick. Repeated requests before that tick
    /// collapse into one.
    pub fn trigger_shoot(&mut self) {
        self.input.fire = true;
    }

    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
        log::info!("debug overlay {}", if self.debug { "on" } else { "off" });
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.config.bounds()
    }

    /// Roll an enemy kind from the configured weights
    pub(crate) fn roll_enemy_kind(&mut self) -> EnemyKind {
        let weights = self.config.enemy_weights;
        match weights.total() {
            0 => EnemyKind::Asteroid,
            total => weights.pick(self.rng.random_range(0..total)),
        }
    }

    /// Acquire and activate one enemy slot. `None` if the pool is full.
    pub fn spawn_enemy(&mut self) -> Option<usize> {
        let kind = self.roll_enemy_kind();
        let planet = self.planet.circle();
        let bounds = self.bounds();
        let speed = self.config.enemy_speed;
        let spawned = self
            .enemies
            .activate(kind, &planet, bounds, speed, &mut self.rng);
        match spawned {
            Some(index) => log::debug!(
                "spawned {} #{} at {:?}",
                kind.as_str(),
                index,
                self.enemies.slots()[index].pos
            ),
            None => log::trace!("enemy pool exhausted, spawn skipped"),
        }
        spawned
    }
}
