//! Ballfield - rolling, repelling balls on a bounded plane
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, repulsion, world state)
//! - `tuning`: Data-driven simulation tuning
//!
//! The renderer and input layer live elsewhere; this crate only advances
//! ball state once per frame and exposes positions/orientations for a
//! renderer to read back.

pub mod sim;
pub mod tuning;

pub use sim::{Ball, FrameInput, World};
pub use tuning::WorldConfig;

use glam::{Vec2, Vec3};

/// Simulation tuning defaults
pub mod consts {
    /// Half extent of the playable plane; walls sit at ±(extent - radius)
    pub const PLANE_HALF_EXTENT: f32 = 500.0;

    /// Per-tick multiplicative velocity decay
    pub const DAMPING_FACTOR: f32 = 0.95;
    /// Impulse magnitude added to an overlapped ball each tick
    pub const REPEL_STRENGTH: f32 = 0.4;
    /// Pull acceleration toward a focus point (reserved tuning knob)
    pub const PULL_SPEED: f32 = 0.001;

    /// Spawn velocity is uniform in ±SPAWN_SPEED_SPREAD per component
    pub const SPAWN_SPEED_SPREAD: f32 = 0.05;
    /// Spawn orientation is a random x-axis tilt in ±SPAWN_TILT_SPREAD
    pub const SPAWN_TILT_SPREAD: f32 = std::f32::consts::PI / 2.0;

    /// Ball radius palette, drawn uniformly at spawn
    pub const BALL_RADII: [f32; 3] = [10.0, 5.0, 20.0];
}

/// Planar speed of a (vx, vz) velocity
#[inline]
pub fn planar_speed(vel: Vec2) -> f32 {
    vel.length()
}

/// Axis a ball rolls about: perpendicular to its planar motion, in the plane
#[inline]
pub fn roll_axis(vel: Vec2) -> Vec3 {
    Vec3::new(-vel.y, 0.0, vel.x).normalize_or_zero()
}
