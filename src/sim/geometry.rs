//! Aim vectors and circle-circle collision
//!
//! Everything that moves in the game is a circle, so these two pure helpers
//! carry all of the steering and hit detection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Distances below this are treated as coincident points
const AIM_EPSILON: f32 = 1e-6;

/// A positioned collision circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }
}

/// Result of an aim computation between two points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aim {
    /// Unit direction of `delta` (zero when the points coincide)
    pub unit: Vec2,
    /// Raw delta `from - to`
    pub delta: Vec2,
}

impl Aim {
    /// Angle of the raw delta, atan2(dy, dx)
    #[inline]
    pub fn angle(&self) -> f32 {
        self.delta.y.atan2(self.delta.x)
    }
}

/// Compute the aim vector `from - to` and its unit direction.
///
/// The sign convention belongs to the caller: the player passes
/// (target, anchor) to get a direction out toward the pointer, enemies pass
/// (self, planet) and negate the unit to home in.
///
/// Coincident points yield a zero unit vector instead of NaN.
pub fn compute_aim(from: Vec2, to: Vec2) -> Aim {
    let delta = from - to;
    let distance = delta.length();
    let unit = if distance > AIM_EPSILON {
        delta / distance
    } else {
        Vec2::ZERO
    };
    Aim { unit, delta }
}

/// True iff the centers are closer than the sum of the radii
#[inline]
pub fn check_collision(a: &Circle, b: &Circle) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// True iff the point lies outside the `[0, width] x [0, height]` rectangle
#[inline]
pub fn out_of_bounds(pos: Vec2, bounds: Vec2) -> bool {
    pos.x < 0.0 || pos.x > bounds.x || pos.y < 0.0 || pos.y > bounds.y
}
