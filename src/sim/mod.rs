//! Deterministic simulation module
//!
//! All ball motion lives here. This module must be pure and deterministic:
//! - One tick per frame, unit timestep
//! - Seeded RNG only
//! - Stable iteration order (by insertion)
//! - No rendering or platform dependencies

pub mod ball;
pub mod input;
pub mod world;

pub use ball::Ball;
pub use input::FrameInput;
pub use world::World;
