//! Data-driven simulation tuning
//!
//! One `WorldConfig` per world; the original scenes hard-coded one tuple of
//! constants each, and the scene variants differ only in which gates are on.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tuning for one simulation world
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Half extent of the plane; walls sit at ±(extent - ball radius)
    pub plane_half_extent: f32,
    /// Per-tick multiplicative velocity decay, in (0, 1)
    pub damping_factor: f32,
    /// Impulse magnitude added to an overlapped ball each tick
    pub repel_strength: f32,
    /// Pull acceleration toward a focus point (declared by the original
    /// scenes but never read; kept as a tuning knob)
    pub pull_speed: f32,
    /// Spawn velocity is uniform in ±spread per component
    pub spawn_speed_spread: f32,
    /// Radius palette drawn from uniformly at spawn
    pub radii: [f32; 3],
    /// Bounce off the plane edges
    pub walls: bool,
    /// Update rolling orientation each tick
    pub rolling: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            plane_half_extent: consts::PLANE_HALF_EXTENT,
            damping_factor: consts::DAMPING_FACTOR,
            repel_strength: consts::REPEL_STRENGTH,
            pull_speed: consts::PULL_SPEED,
            spawn_speed_spread: consts::SPAWN_SPEED_SPREAD,
            radii: consts::BALL_RADII,
            walls: true,
            rolling: true,
        }
    }
}

impl WorldConfig {
    /// Parse a config from JSON; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = WorldConfig::default();
        assert_eq!(cfg.plane_half_extent, 500.0);
        assert_eq!(cfg.damping_factor, 0.95);
        assert_eq!(cfg.repel_strength, 0.4);
        assert!(cfg.walls);
        assert!(cfg.rolling);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let cfg = WorldConfig::from_json(r#"{"damping_factor": 0.9, "walls": false}"#).unwrap();
        assert_eq!(cfg.damping_factor, 0.9);
        assert!(!cfg.walls);
        assert_eq!(cfg.repel_strength, 0.4);
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = WorldConfig {
            repel_strength: 0.25,
            rolling: false,
            ..Default::default()
        };
        let parsed = WorldConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(parsed.repel_strength, 0.25);
        assert!(!parsed.rolling);
    }
}
