//! Property tests for the ball simulation.

use glam::{Quat, Vec2, Vec3};
use proptest::prelude::*;

use ballfield::sim::ball::{Ball, repel_from};
use ballfield::{World, WorldConfig};

fn free_cfg(damping: f32) -> WorldConfig {
    WorldConfig {
        damping_factor: damping,
        repel_strength: 0.0,
        walls: false,
        rolling: false,
        ..Default::default()
    }
}

proptest! {
    /// With no repulsion and no walls, damping makes speed non-increasing.
    #[test]
    fn speed_never_increases(
        vx in -5.0f32..5.0,
        vz in -5.0f32..5.0,
        damping in 0.01f32..0.999,
        ticks in 1usize..200,
    ) {
        let mut world = World::new(free_cfg(damping), 0);
        world.spawn_with(Vec3::ZERO, Vec2::new(vx, vz), 10.0, Quat::IDENTITY);

        let mut prev = world.balls()[0].vel.length();
        for _ in 0..ticks {
            world.tick();
            let speed = world.balls()[0].vel.length();
            prop_assert!(speed <= prev + 1e-6);
            prev = speed;
        }
    }

    /// Each tick moves a free ball by exactly its post-damping velocity.
    #[test]
    fn euler_step_matches_velocity(
        px in -100.0f32..100.0,
        pz in -100.0f32..100.0,
        vx in -5.0f32..5.0,
        vz in -5.0f32..5.0,
        damping in 0.01f32..0.999,
    ) {
        let mut world = World::new(free_cfg(damping), 0);
        world.spawn_with(Vec3::new(px, 0.0, pz), Vec2::new(vx, vz), 10.0, Quat::IDENTITY);

        let before = world.balls()[0].pos;
        world.tick();
        let ball = &world.balls()[0];
        prop_assert!((ball.pos.x - before.x - ball.vel.x).abs() < 1e-4);
        prop_assert!((ball.pos.z - before.z - ball.vel.y).abs() < 1e-4);
        prop_assert_eq!(ball.pos.y, before.y);
    }

    /// An overlapped ball receives an impulse of exactly the repel strength;
    /// the acting ball receives nothing.
    #[test]
    fn repel_impulse_has_fixed_magnitude(
        angle in 0.0f32..std::f32::consts::TAU,
        dist in 0.01f32..3.9,
        strength in 0.0f32..2.0,
    ) {
        // Radii 2 + 2: any separation below 4 overlaps
        let actor = Ball::new(1, Vec3::ZERO, Vec2::ZERO, 2.0, Quat::IDENTITY);
        let other_pos = Vec3::new(angle.cos() * dist, 0.0, angle.sin() * dist);
        let mut balls = vec![
            actor.clone(),
            Ball::new(2, other_pos, Vec2::ZERO, 2.0, Quat::IDENTITY),
        ];

        repel_from(actor.pos, actor.radius, strength, &mut balls);

        prop_assert_eq!(balls[0].vel, Vec2::ZERO);
        let gained = balls[1].vel.length();
        prop_assert!((gained - strength).abs() < 1e-4);
        // Impulse points away from the actor
        prop_assert!(balls[1].vel.dot(Vec2::new(other_pos.x, other_pos.z)) >= 0.0);
    }

    /// A single walled ball can overshoot the wall by at most one step, and
    /// never runs away: |x| stays within the bound plus its initial speed.
    #[test]
    fn wall_overshoot_is_bounded(
        vx in -8.0f32..8.0,
        vz in -8.0f32..8.0,
        ticks in 1usize..500,
    ) {
        let cfg = WorldConfig {
            repel_strength: 0.0,
            rolling: false,
            plane_half_extent: 100.0,
            ..Default::default()
        };
        let radius = 10.0;
        let limit = cfg.plane_half_extent - radius + vx.abs().max(vz.abs()) + 1e-3;

        let mut world = World::new(cfg, 0);
        world.spawn_with(Vec3::ZERO, Vec2::new(vx, vz), radius, Quat::IDENTITY);

        for _ in 0..ticks {
            world.tick();
            let pos = world.balls()[0].pos;
            prop_assert!(pos.x.abs() <= limit);
            prop_assert!(pos.z.abs() <= limit);
        }
    }

    /// Many balls crammed together never produce non-finite state.
    #[test]
    fn crowded_world_stays_finite(
        seed in 0u64..u64::MAX,
        n in 2usize..12,
        ticks in 1usize..300,
    ) {
        let mut world = World::new(WorldConfig::default(), seed);
        for i in 0..n {
            // Deliberately overlapping spawn points, including duplicates
            world.spawn(Vec3::new((i % 3) as f32, 0.0, (i % 2) as f32));
        }
        for _ in 0..ticks {
            world.tick();
        }
        for ball in world.balls() {
            prop_assert!(ball.pos.is_finite());
            prop_assert!(ball.vel.is_finite());
            prop_assert!(ball.orientation.is_finite());
        }
    }
}
