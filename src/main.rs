//! Ballfield headless demo
//!
//! Stands in for the frame loop of the excluded rendering layer: feeds a
//! scripted input sequence into a seeded world, one tick per frame, and
//! logs where the balls settle. Run with `RUST_LOG=debug` for per-spawn
//! output.

use glam::Vec3;

use ballfield::{FrameInput, World, WorldConfig};

const FRAMES: u64 = 600;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB411);
    log::info!("Ballfield headless demo, seed {seed}");

    let mut world = World::new(WorldConfig::default(), seed);
    let mut input = FrameInput::default();

    for frame in 0..FRAMES {
        // Scripted "user": drop a cluster of balls early, pause briefly in
        // the middle of the run.
        match frame {
            0 => input.spawn_at = Some(Vec3::ZERO),
            10 => input.spawn_at = Some(Vec3::new(8.0, 0.0, 0.0)),
            20 => input.spawn_at = Some(Vec3::new(-6.0, 0.0, 5.0)),
            30 => input.spawn_at = Some(Vec3::new(0.0, 0.0, -7.0)),
            300 | 360 => input.toggle_pause = true,
            _ => {}
        }

        world.apply_input(&input);
        world.tick();

        // Clear one-shot inputs after processing
        input = FrameInput::default();
    }

    log::info!(
        "ran {} ticks ({} skipped while paused), {} balls",
        world.time_ticks(),
        FRAMES - world.time_ticks(),
        world.balls().len()
    );
    for ball in world.balls() {
        log::info!(
            "ball {}: radius {:>4.1}  pos ({:>7.2}, {:>4.1}, {:>7.2})  speed {:.4}",
            ball.id,
            ball.radius,
            ball.pos.x,
            ball.pos.y,
            ball.pos.z,
            ball.vel.length()
        );
    }
}
