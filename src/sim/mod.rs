//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only arrives as a delta passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod enemy;
pub mod geometry;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use enemy::{Enemy, EnemyEvent, EnemyKind, EnemyPool, EnemyProfile, EnemyTickSummary};
pub use geometry::{Aim, Circle, check_collision, compute_aim, out_of_bounds};
pub use player::{Planet, Player};
pub use projectile::{Projectile, ProjectilePool};
pub use snapshot::{EnemyView, PlayerView, ProjectileView, WorldSnapshot};
pub use spawner::Spawner;
pub use state::World;
pub use tick::{FrameClock, TickInput, TickReport, tick};
