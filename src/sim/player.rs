//! The planet and the player orbiting it
//!
//! The player has no velocity of its own: every tick it is snapped onto the
//! orbit circle, facing the pointer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Aim, Circle, compute_aim};
use super::projectile::ProjectilePool;

/// Fixed anchor at the center of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub pos: Vec2,
    pub radius: f32,
}

impl Planet {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Facing (radians), atan2 of the raw aim delta
    pub angle: f32,
    /// Aim from the planet out toward the pointer
    pub aim: Aim,
    /// Muzzle speed multiplier applied to the unit aim
    pub shot_speed: f32,
}

impl Player {
    pub fn new(radius: f32, shot_speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            radius,
            angle: 0.0,
            aim: Aim::default(),
            shot_speed,
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Orbit distance from the planet center
    #[inline]
    pub fn orbit_radius(&self, anchor: &Planet) -> f32 {
        anchor.radius + self.radius
    }

    /// Lock onto the orbit on the side facing `target`
    pub fn update(&mut self, target: Vec2, anchor: &Planet) {
        // Target minus anchor: unit points out from the planet at the pointer
        self.aim = compute_aim(target, anchor.pos);
        self.pos = anchor.pos + self.aim.unit * self.orbit_radius(anchor);
        self.angle = self.aim.angle();
    }

    /// Fire one projectile along the aim. Dropped silently when the pool is empty.
    ///
    /// Returns whether a shot left the barrel.
    pub fn shoot(&self, pool: &mut ProjectilePool) -> bool {
        match pool.acquire() {
            Some(projectile) => {
                let muzzle = self.pos + self.aim.unit * self.radius;
                projectile.start(muzzle, self.aim.unit * self.shot_speed);
                true
            }
            None => {
                log::trace!("projectile pool exhausted, shot dropped");
                false
            }
        }
    }
}
