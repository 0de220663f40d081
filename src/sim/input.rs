//! Per-frame input commands
//!
//! The input layer (pointer ray cast against the ground plane, key mapping)
//! lives outside this crate. It hands the simulation one `FrameInput` per
//! frame; one-shot fields are cleared by the driver after each tick.

use glam::Vec3;

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Spawn a ball at this world-space point (pointer/plane intersection)
    pub spawn_at: Option<Vec3>,
    /// Pause toggle
    pub toggle_pause: bool,
}
