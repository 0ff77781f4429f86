//! Draw data handed to the renderer
//!
//! Only active slots make it into a snapshot; each carries its slot index so
//! the renderer can keep per-slot sprite state if it wants to.

use glam::Vec2;
use serde::Serialize;

use super::enemy::EnemyKind;
use super::geometry::Circle;
use super::state::World;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub slot: usize,
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub slot: usize,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub radius: f32,
    pub lives: i32,
    /// Death-animation column
    pub frame_x: u32,
    /// Sprite variant row
    pub frame_y: u32,
}

/// Read-only view of one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub time_ticks: u64,
    pub score: u64,
    /// Draw collision circles
    pub debug: bool,
    pub planet: Circle,
    pub player: PlayerView,
    pub projectiles: Vec<ProjectileView>,
    pub enemies: Vec<EnemyView>,
}

impl World {
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            time_ticks: self.time_ticks,
            score: self.score,
            debug: self.debug,
            planet: self.planet.circle(),
            player: PlayerView {
                pos: self.player.pos,
                radius: self.player.radius,
                angle: self.player.angle,
            },
            projectiles: self
                .projectiles
                .iter_active()
                .map(|(slot, p)| ProjectileView {
                    slot,
                    pos: p.pos,
                    radius: p.radius,
                })
                .collect(),
            enemies: self
                .enemies
                .iter_active()
                .map(|(slot, e)| EnemyView {
                    slot,
                    kind: e.kind,
                    pos: e.pos,
                    radius: e.radius,
                    lives: e.lives,
                    frame_x: e.frame_x,
                    frame_y: e.frame_y,
                })
                .collect(),
        }
    }
}
