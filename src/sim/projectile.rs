//! Fixed-capacity projectile pool
//!
//! Slots are allocated once and toggled active/inactive. A slot leaves play
//! either by flying off the canvas or by being consumed on a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, out_of_bounds};

/// A single projectile slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    active: bool,
}

impl Projectile {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            active: false,
        }
    }

    /// Put the slot into play
    pub fn start(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.vel = vel;
        self.active = true;
    }

    /// Return the slot to the pool
    pub fn reset(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// Pool of reusable projectile slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
}

impl ProjectilePool {
    /// Pre-allocate `capacity` inactive slots
    pub fn new(capacity: usize, radius: f32) -> Self {
        Self {
            slots: (0..capacity).map(|_| Projectile::new(radius)).collect(),
        }
    }

    /// First inactive slot, or `None` when every slot is in flight.
    ///
    /// The slot stays inactive until the caller starts it.
    pub fn acquire(&mut self) -> Option<&mut Projectile> {
        self.slots.iter_mut().find(|p| !p.active)
    }

    /// Move every active projectile and expire the ones that left `bounds`
    pub fn tick(&mut self, bounds: Vec2) {
        for projectile in self.slots.iter_mut().filter(|p| p.active) {
            projectile.pos += projectile.vel;
            if out_of_bounds(projectile.pos, bounds) {
                projectile.reset();
            }
        }
    }

    /// Deactivate a slot immediately (it hit something)
    pub fn consume(&mut self, index: usize) {
        if let Some(projectile) = self.slots.get_mut(index) {
            projectile.reset();
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    /// All slots, active or not, in stable index order
    pub fn slots(&self) -> &[Projectile] {
        &self.slots
    }

    /// Active slots paired with their index
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Projectile)> {
        self.slots.iter().enumerate().filter(|(_, p)| p.active)
    }
}
