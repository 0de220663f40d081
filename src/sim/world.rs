//! World state and the per-frame tick
//!
//! Owns the ball collection, the seeded RNG, and the pause flag. One
//! `tick()` per rendered frame; the renderer reads ball positions and
//! orientations afterwards.

use glam::{Quat, Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ball::{Ball, repel_from};
use super::input::FrameInput;
use crate::tuning::WorldConfig;

/// A simulation world: balls on a bounded plane
#[derive(Debug)]
pub struct World {
    config: WorldConfig,
    /// Seed the RNG was constructed from, for reproducing a run
    pub seed: u64,
    /// Balls in insertion order; tick order follows it
    balls: Vec<Ball>,
    paused: bool,
    time_ticks: u64,
    next_id: u32,
    rng: Pcg32,
}

impl World {
    /// Create an empty, running world with the given tuning and seed.
    pub fn new(config: WorldConfig, seed: u64) -> Self {
        log::info!("World created (seed {seed})");
        Self {
            config,
            seed,
            balls: Vec::new(),
            paused: false,
            time_ticks: 0,
            next_id: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply one frame's input commands before ticking.
    pub fn apply_input(&mut self, input: &FrameInput) {
        if let Some(point) = input.spawn_at {
            self.spawn(point);
        }
        if input.toggle_pause {
            self.toggle_pause();
        }
    }

    /// Advance every ball by one tick, in insertion order. No-op while
    /// paused.
    ///
    /// Each ball runs its full update (damp, integrate, roll, bounce, then
    /// the repulsion pass over the whole collection) before the next ball
    /// starts. There is no snapshot: a ball later in the pass sees the
    /// already-moved state of earlier balls, and the one-sided repulsion
    /// impulse makes the outcome depend on insertion order. Deterministic
    /// for a fixed order and seed.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.time_ticks += 1;

        for i in 0..self.balls.len() {
            let (origin, radius) = {
                let b = &mut self.balls[i];
                b.advance(&self.config);
                (b.pos, b.radius)
            };
            repel_from(origin, radius, self.config.repel_strength, &mut self.balls);
        }
    }

    /// Spawn a ball at an arbitrary finite world-space point (typically the
    /// pointer's intersection with the ground plane). Radius comes from the
    /// palette, velocity and tilt from the seeded RNG. Returns the ball id.
    ///
    /// No bounds check: an out-of-plane spawn is accepted and the wall
    /// bounce takes over on later ticks.
    pub fn spawn(&mut self, point: Vec3) -> u32 {
        let which = self.rng.random_range(0..self.config.radii.len());
        let radius = self.config.radii[which];

        // random_range panics on an empty range
        let spread = self.config.spawn_speed_spread;
        let vel = if spread > 0.0 {
            Vec2::new(
                self.rng.random_range(-spread..spread),
                self.rng.random_range(-spread..spread),
            )
        } else {
            Vec2::ZERO
        };
        let tilt = crate::consts::SPAWN_TILT_SPREAD;
        let orientation = Quat::from_rotation_x(self.rng.random_range(-tilt..tilt));

        self.spawn_with(point, vel, radius, orientation)
    }

    /// Spawn with explicit velocity/radius/orientation (no RNG draw).
    pub fn spawn_with(&mut self, point: Vec3, vel: Vec2, radius: f32, orientation: Quat) -> u32 {
        let id = self.next_entity_id();
        log::debug!(
            "spawn ball {id}: pos ({:.1}, {:.1}, {:.1}) radius {radius}",
            point.x,
            point.y,
            point.z
        );
        self.balls.push(Ball::new(id, point, vel, radius, orientation));
        id
    }

    /// Flip between RUNNING and PAUSED. Paused worlds skip ticks entirely.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }
}
