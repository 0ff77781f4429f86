//! Enemy slots and their life/death cycle
//!
//! Every enemy kind shares one behavior; kinds differ only in the constants
//! of their [`EnemyProfile`]. A slot moves through
//! alive -> dying (lives < 1, frame animating) -> inactive.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, check_collision, compute_aim};
use super::projectile::ProjectilePool;

/// Enemy kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Slow rock, takes a beating
    #[default]
    Asteroid,
    /// Fragile alien, pops on the first hit
    Beetlemorph,
}

/// Per-kind constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyProfile {
    /// Number of idle sprite rows (`frame_y` is drawn from `0..variants`)
    pub variants: u32,
    /// Lives restored on activation
    pub max_lives: i32,
    /// Last death-animation frame; the slot frees once `frame_x` passes it
    pub max_frame: u32,
    /// Score awarded when shot down
    pub score: u64,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 2] = [EnemyKind::Asteroid, EnemyKind::Beetlemorph];

    pub fn profile(self) -> EnemyProfile {
        match self {
            EnemyKind::Asteroid => EnemyProfile {
                variants: 4,
                max_lives: 5,
                max_frame: 7,
                score: 5,
            },
            EnemyKind::Beetlemorph => EnemyProfile {
                variants: 4,
                max_lives: 1,
                max_frame: 3,
                score: 1,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Asteroid => "asteroid",
            EnemyKind::Beetlemorph => "beetlemorph",
        }
    }
}

/// What happened to an enemy during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyEvent {
    /// Slot was inactive, nothing to do
    Idle,
    /// Moved (alive or dying)
    Moved,
    /// Lives dropped below 1 this tick
    Defeated,
    /// Ran into the planet or the player and was removed
    Crashed,
    /// Death animation finished, slot freed
    Expired,
}

/// A single enemy slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Remaining lives, may go negative on simultaneous hits
    pub lives: i32,
    /// Death-animation frame (column)
    pub frame_x: u32,
    /// Idle visual variant (row)
    pub frame_y: u32,
    active: bool,
}

impl Enemy {
    pub fn new(radius: f32) -> Self {
        Self {
            kind: EnemyKind::default(),
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            lives: 0,
            frame_x: 0,
            frame_y: 0,
            active: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True while the death animation plays
    #[inline]
    pub fn is_dying(&self) -> bool {
        self.active && self.lives < 1
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    #[inline]
    pub fn profile(&self) -> EnemyProfile {
        self.kind.profile()
    }

    /// Activate just outside a random canvas edge, heading for the planet
    pub fn start<R: Rng>(
        &mut self,
        kind: EnemyKind,
        planet: &Circle,
        bounds: Vec2,
        speed: f32,
        rng: &mut R,
    ) {
        let profile = kind.profile();
        self.kind = kind;
        self.active = true;
        self.lives = profile.max_lives;
        self.frame_x = 0;
        self.frame_y = rng.random_range(0..profile.variants.max(1));

        self.pos = if rng.random_bool(0.5) {
            // Top or bottom band
            let x = rng.random::<f32>() * bounds.x;
            let y = if rng.random_bool(0.5) {
                -self.radius
            } else {
                bounds.y + self.radius
            };
            Vec2::new(x, y)
        } else {
            // Left or right band
            let x = if rng.random_bool(0.5) {
                -self.radius
            } else {
                bounds.x + self.radius
            };
            let y = rng.random::<f32>() * bounds.y;
            Vec2::new(x, y)
        };

        // Aim points away from the planet; flip it to home in
        let aim = compute_aim(self.pos, planet.pos);
        self.vel = -aim.unit * speed;
    }

    /// Return the slot to the pool
    pub fn reset(&mut self) {
        self.active = false;
    }

    /// Advance one tick against the planet, the player and live projectiles
    pub fn update(
        &mut self,
        planet: &Circle,
        player: &Circle,
        projectiles: &mut ProjectilePool,
    ) -> EnemyEvent {
        if !self.active {
            return EnemyEvent::Idle;
        }

        if self.frame_x > self.profile().max_frame {
            self.reset();
            return EnemyEvent::Expired;
        }

        self.pos += self.vel;
        let body = self.circle();

        if check_collision(&body, planet) || check_collision(&body, player) {
            self.reset();
            return EnemyEvent::Crashed;
        }

        let was_alive = self.lives >= 1;
        // Every overlapping projectile lands, no ordering between them
        for index in 0..projectiles.capacity() {
            let projectile = &projectiles.slots()[index];
            if projectile.is_active() && check_collision(&body, &projectile.circle()) {
                projectiles.consume(index);
                self.lives -= 1;
            }
        }

        if self.lives < 1 {
            self.frame_x += 1;
            if was_alive {
                return EnemyEvent::Defeated;
            }
        }
        EnemyEvent::Moved
    }
}

/// Totals from one pass over the enemy pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemyTickSummary {
    pub defeated: u32,
    pub crashed: u32,
    pub expired: u32,
    /// Score earned by this tick's defeats
    pub score: u64,
}

/// Pool of reusable enemy slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyPool {
    slots: Vec<Enemy>,
}

impl EnemyPool {
    /// Pre-allocate `capacity` inactive slots
    pub fn new(capacity: usize, radius: f32) -> Self {
        Self {
            slots: (0..capacity).map(|_| Enemy::new(radius)).collect(),
        }
    }

    fn free_index(&self) -> Option<usize> {
        self.slots.iter().position(|e| !e.active)
    }

    /// First inactive slot, or `None` when the pool is exhausted
    pub fn acquire(&mut self) -> Option<&mut Enemy> {
        let index = self.free_index()?;
        self.slots.get_mut(index)
    }

    /// Acquire and start a slot; returns its index, `None` if exhausted
    pub fn activate<R: Rng>(
        &mut self,
        kind: EnemyKind,
        planet: &Circle,
        bounds: Vec2,
        speed: f32,
        rng: &mut R,
    ) -> Option<usize> {
        let index = self.free_index()?;
        self.slots[index].start(kind, planet, bounds, speed, rng);
        Some(index)
    }

    /// Update every slot in index order
    pub fn tick(
        &mut self,
        planet: &Circle,
        player: &Circle,
        projectiles: &mut ProjectilePool,
    ) -> EnemyTickSummary {
        let mut summary = EnemyTickSummary::default();
        for (index, enemy) in self.slots.iter_mut().enumerate() {
            match enemy.update(planet, player, projectiles) {
                EnemyEvent::Defeated => {
                    let score = enemy.profile().score;
                    log::debug!("{} #{} shot down (+{})", enemy.kind.as_str(), index, score);
                    summary.defeated += 1;
                    summary.score += score;
                }
                EnemyEvent::Crashed => {
                    log::debug!("{} #{} crashed at {:?}", enemy.kind.as_str(), index, enemy.pos);
                    summary.crashed += 1;
                }
                EnemyEvent::Expired => summary.expired += 1,
                EnemyEvent::Idle | EnemyEvent::Moved => {}
            }
        }
        summary
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|e| e.active).count()
    }

    /// All slots, active or not, in stable index order
    pub fn slots(&self) -> &[Enemy] {
        &self.slots
    }

    #[cfg(test)]
    pub(crate) fn slots_mut(&mut self) -> &mut [Enemy] {
        &mut self.slots
    }

    /// Active slots paired with their index
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.slots.iter().enumerate().filter(|(_, e)| e.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(800.0, 800.0);

    fn planet() -> Circle {
        Circle::new(Vec2::new(400.0, 400.0), 80.0)
    }

    /// Player parked far from anything the tests move around
    fn player() -> Circle {
        Circle::new(Vec2::new(-5000.0, -5000.0), 40.0)
    }

    /// A live enemy parked at `pos` with no velocity
    fn parked(kind: EnemyKind, pos: Vec2) -> Enemy {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut enemy = Enemy::new(40.0);
        enemy.start(kind, &planet(), BOUNDS, 1.0, &mut rng);
        enemy.pos = pos;
        enemy.vel = Vec2::ZERO;
        enemy
    }

    fn fire_at(pool: &mut ProjectilePool, pos: Vec2) {
        if let Some(slot) = pool.acquire() {
            slot.start(pos, Vec2::ZERO);
        }
    }

    #[test]
    fn test_start_spawns_outside_bounds_heading_for_planet() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let mut enemy = Enemy::new(40.0);
            enemy.start(EnemyKind::Asteroid, &planet(), BOUNDS, 1.0, &mut rng);

            let p = enemy.pos;
            let on_band = p.x == -40.0 || p.x == 840.0 || p.y == -40.0 || p.y == 840.0;
            assert!(on_band, "spawned inside the canvas at {p:?}");
            assert!(enemy.frame_y < 4);
            assert_eq!(enemy.lives, 5);
            assert_eq!(enemy.frame_x, 0);

            // Unit speed toward the planet
            assert!((enemy.vel.length() - 1.0).abs() < 1e-4);
            let to_planet = (planet().pos - p).normalize();
            assert!(enemy.vel.dot(to_planet) > 0.999);
        }
    }

    #[test]
    fn test_spawned_enemy_reaches_planet() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut projectiles = ProjectilePool::new(0, 5.0);
        for _ in 0..20 {
            let mut enemy = Enemy::new(40.0);
            enemy.start(EnemyKind::Asteroid, &planet(), BOUNDS, 1.0, &mut rng);
            let distance = enemy.pos.distance(planet().pos);
            let budget = distance.ceil() as u32;

            let mut ticks = 0;
            while enemy.is_active() && ticks < budget {
                enemy.update(&planet(), &player(), &mut projectiles);
                ticks += 1;
            }
            assert!(!enemy.is_active(), "still flying after {budget} ticks");
            // Contact happens once the gap between the circles closes
            assert!(ticks as f32 >= distance - 120.0);
        }
    }

    #[test]
    fn test_start_restores_full_health() {
        let mut enemy = parked(EnemyKind::Asteroid, Vec2::new(100.0, 100.0));
        enemy.lives = -2;
        enemy.frame_x = 6;
        let mut rng = Pcg32::seed_from_u64(3);
        enemy.start(EnemyKind::Beetlemorph, &planet(), BOUNDS, 1.0, &mut rng);
        assert_eq!(enemy.lives, 1);
        assert_eq!(enemy.frame_x, 0);
        assert_eq!(enemy.kind, EnemyKind::Beetlemorph);
    }

    #[test]
    fn test_contact_with_planet_or_player_removes() {
        let mut projectiles = ProjectilePool::new(1, 5.0);

        let mut enemy = parked(EnemyKind::Asteroid, Vec2::new(400.0, 300.0));
        assert_eq!(
            enemy.update(&planet(), &player(), &mut projectiles),
            EnemyEvent::Crashed
        );
        assert!(!enemy.is_active());

        let mut enemy = parked(EnemyKind::Asteroid, Vec2::new(100.0, 100.0));
        let player = Circle::new(Vec2::new(150.0, 100.0), 40.0);
        assert_eq!(
            enemy.update(&planet(), &player, &mut projectiles),
            EnemyEvent::Crashed
        );
    }

    #[test]
    fn test_each_hit_costs_one_life_and_consumes_projectile() {
        let mut projectiles = ProjectilePool::new(4, 5.0);
        let mut enemy = parked(EnemyKind::Asteroid, Vec2::new(100.0, 100.0));

        fire_at(&mut projectiles, Vec2::new(110.0, 100.0));
        fire_at(&mut projectiles, Vec2::new(100.0, 120.0));
        // Out of reach
        fire_at(&mut projectiles, Vec2::new(300.0, 100.0));

        let event = enemy.update(&planet(), &player(), &mut projectiles);
        assert_eq!(event, EnemyEvent::Moved);
        assert_eq!(enemy.lives, 3);
        assert_eq!(projectiles.active_count(), 1);
        assert!(projectiles.slots()[2].is_active());
    }

    #[test]
    fn test_hit_hands_slot_back_to_the_pool() {
        let mut projectiles = ProjectilePool::new(3, 5.0);
        let mut enemy = parked(EnemyKind::Asteroid, Vec2::new(100.0, 100.0));

        fire_at(&mut projectiles, Vec2::new(600.0, 600.0));
        fire_at(&mut projectiles, Vec2::new(100.0, 100.0));
        fire_at(&mut projectiles, Vec2::new(700.0, 700.0));
        assert!(projectiles.acquire().is_none());

        enemy.update(&planet(), &player(), &mut projectiles);
        assert_eq!(enemy.lives, 4);
        assert!(!projectiles.slots()[1].is_active());

        // The next shot reuses the slot the hit freed
        let slot = projectiles.acquire().expect("hit freed a slot");
        slot.start(Vec2::new(50.0, 50.0), Vec2::ZERO);
        assert_eq!(projectiles.slots()[1].pos, Vec2::new(50.0, 50.0));
        assert_eq!(projectiles.active_count(), 3);
    }

    #[test]
    fn test_double_hit_on_single_life_goes_negative() {
        let mut projectiles = ProjectilePool::new(2, 5.0);
        let mut enemy = parked(EnemyKind::Beetlemorph, Vec2::new(100.0, 100.0));
        let max_frame = enemy.profile().max_frame;

        fire_at(&mut projectiles, Vec2::new(95.0, 100.0));
        fire_at(&mut projectiles, Vec2::new(105.0, 100.0));

        let event = enemy.update(&planet(), &player(), &mut projectiles);
        assert_eq!(event, EnemyEvent::Defeated);
        assert_eq!(enemy.lives, -1);
        assert_eq!(projectiles.active_count(), 0);

        for _ in 0..max_frame {
            enemy.update(&planet(), &player(), &mut projectiles);
            assert!(enemy.is_active());
        }
        assert_eq!(
            enemy.update(&planet(), &player(), &mut projectiles),
            EnemyEvent::Expired
        );
    }

    #[test]
    fn test_death_animation_takes_max_frame_plus_one_ticks() {
        let mut projectiles = ProjectilePool::new(1, 5.0);
        let mut enemy = parked(EnemyKind::Asteroid, Vec2::new(100.0, 100.0));
        let max_frame = enemy.profile().max_frame;
        enemy.lives = 1;

        fire_at(&mut projectiles, Vec2::new(100.0, 100.0));
        assert_eq!(
            enemy.update(&planet(), &player(), &mut projectiles),
            EnemyEvent::Defeated
        );
        assert_eq!(enemy.lives, 0);
        assert!(enemy.is_dying());

        let mut ticks = 0;
        while enemy.is_active() {
            enemy.update(&planet(), &player(), &mut projectiles);
            ticks += 1;
        }
        assert_eq!(ticks, max_frame + 1);
    }

    #[test]
    fn test_pool_activate_and_exhaust() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut pool = EnemyPool::new(2, 40.0);
        assert_eq!(
            pool.activate(EnemyKind::Asteroid, &planet(), BOUNDS, 1.0, &mut rng),
            Some(0)
        );
        assert_eq!(
            pool.activate(EnemyKind::Asteroid, &planet(), BOUNDS, 1.0, &mut rng),
            Some(1)
        );
        assert_eq!(
            pool.activate(EnemyKind::Asteroid, &planet(), BOUNDS, 1.0, &mut rng),
            None
        );
        assert!(pool.acquire().is_none());
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_acquire_and_activate_agree_on_free_slot() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut pool = EnemyPool::new(3, 40.0);
        pool.slots_mut()[0] = parked(EnemyKind::Asteroid, Vec2::new(100.0, 100.0));

        let marker = Vec2::new(-123.0, -456.0);
        pool.acquire().expect("free slot").pos = marker;
        assert_eq!(pool.slots()[1].pos, marker);
        // Acquire alone does not claim the slot
        assert_eq!(
            pool.activate(EnemyKind::Beetlemorph, &planet(), BOUNDS, 1.0, &mut rng),
            Some(1)
        );
        assert_eq!(pool.slots()[1].kind, EnemyKind::Beetlemorph);
        assert_eq!(
            pool.activate(EnemyKind::Asteroid, &planet(), BOUNDS, 1.0, &mut rng),
            Some(2)
        );
        assert!(pool.acquire().is_none());

        pool.slots_mut()[0].reset();
        assert_eq!(
            pool.activate(EnemyKind::Asteroid, &planet(), BOUNDS, 1.0, &mut rng),
            Some(0)
        );
    }

    #[test]
    fn test_pool_tick_summary() {
        let mut pool = EnemyPool::new(2, 40.0);
        pool.slots_mut()[0] = parked(EnemyKind::Beetlemorph, Vec2::new(100.0, 100.0));
        pool.slots_mut()[1] = parked(EnemyKind::Asteroid, Vec2::new(400.0, 330.0));

        let mut projectiles = ProjectilePool::new(1, 5.0);
        fire_at(&mut projectiles, Vec2::new(100.0, 100.0));

        let summary = pool.tick(&planet(), &player(), &mut projectiles);
        assert_eq!(summary.defeated, 1);
        assert_eq!(summary.crashed, 1);
        assert_eq!(summary.score, EnemyKind::Beetlemorph.profile().score);
        assert_eq!(pool.active_count(), 1);
    }
}
