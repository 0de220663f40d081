//! Ball state and per-tick motion
//!
//! A ball lives on the ground plane: position is 3D (y is fixed at spawn
//! height), velocity is planar (x/z). Orientation is visual rolling only
//! and never feeds back into the motion.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::tuning::WorldConfig;
use crate::{planar_speed, roll_axis};

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    /// World position; y never changes after spawn
    pub pos: Vec3,
    /// Planar velocity: x maps to world x, y to world z
    pub vel: Vec2,
    pub radius: f32,
    /// Rolling orientation, read by the renderer
    pub orientation: Quat,
}

impl Ball {
    pub fn new(id: u32, pos: Vec3, vel: Vec2, radius: f32, orientation: Quat) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            orientation,
        }
    }

    /// Advance this ball by one tick: damp, integrate, roll, bounce.
    ///
    /// The repel pass against the rest of the collection is separate
    /// ([`repel_from`]) because it mutates *other* balls.
    pub fn advance(&mut self, cfg: &WorldConfig) {
        // Exponential decay toward rest, then explicit Euler with the
        // already-damped velocity (unit timestep = one frame).
        self.vel *= cfg.damping_factor;
        self.pos.x += self.vel.x;
        self.pos.z += self.vel.y;

        if cfg.rolling {
            self.roll();
        }
        if cfg.walls {
            self.bounce_walls(cfg.plane_half_extent);
        }
    }

    /// Rotate the orientation as if the ball rolled its last displacement.
    fn roll(&mut self) {
        let speed = planar_speed(self.vel);
        if speed == 0.0 {
            return;
        }
        let angle = speed / self.radius;
        let axis = roll_axis(self.vel);
        self.orientation = (Quat::from_axis_angle(axis, -angle) * self.orientation).normalize();
    }

    /// Invert a velocity component when its position component reaches the
    /// wall. No position clamp: a fast ball may sit past the wall for one
    /// frame before the inverted velocity carries it back.
    fn bounce_walls(&mut self, half_extent: f32) {
        let bound = half_extent - self.radius;
        if self.pos.x <= -bound || self.pos.x >= bound {
            self.vel.x = -self.vel.x;
        }
        if self.pos.z <= -bound || self.pos.z >= bound {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Apply the repulsion pass for one acting ball.
///
/// Every ball overlapping the acting ball (center distance below the sum of
/// radii) receives an impulse of `strength` directed away from the actor.
/// The impulse lands on the *other* ball only; the actor's own velocity is
/// untouched. Passing the full collection including the actor is fine: the
/// self case has zero separation and `normalize_or_zero` turns it into a
/// zero impulse, as does any exactly-coincident pair.
pub fn repel_from(origin: Vec3, origin_radius: f32, strength: f32, balls: &mut [Ball]) {
    for b in balls.iter_mut() {
        let delta = b.pos - origin;
        if delta.length() < b.radius + origin_radius {
            let push = delta.normalize_or_zero() * strength;
            b.vel.x += push.x;
            b.vel.y += push.z;
        }
    }
}
