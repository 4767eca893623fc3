//! Kinematic integration system.
//!
//! Applies player input to controllable bodies, clamps velocity to each
//! axis's limit (sign preserved), then updates position:
//! position += velocity * dt.

use hecs::World;

use boxfall_core::commands::ControlState;
use boxfall_core::components::{Controllable, Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt_secs: f32, controls: &ControlState) {
    for (_entity, (pos, vel, control)) in
        world.query_mut::<(&mut Position, &mut Velocity, Option<&Controllable>)>()
    {
        if let Some(control) = control {
            apply_controls(vel, control, controls);
        }
        clamp(vel);
        pos.current += vel.linear * dt_secs;
    }
}

/// Horizontal velocity follows the input axis. A jump only starts from
/// vertical rest, which collision produces when a body lands.
fn apply_controls(vel: &mut Velocity, control: &Controllable, controls: &ControlState) {
    vel.linear.x = controls.horizontal * control.speed;
    if controls.jump && vel.linear.y == 0.0 {
        vel.linear.y = -control.speed;
    }
}

/// Clamp each axis to [-max, max]. Must not panic on a NaN or negative limit.
pub fn clamp(vel: &mut Velocity) {
    vel.linear.x = vel.linear.x.max(-vel.max.x).min(vel.max.x);
    vel.linear.y = vel.linear.y.max(-vel.max.y).min(vel.max.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxfall_core::types::Vec2;

    #[test]
    fn integrates_velocity_over_dt() {
        let mut world = World::new();
        let e = world.spawn((Position::new(10.0, 20.0), Velocity::new(100.0, -50.0)));
        run(&mut world, 0.5, &ControlState::default());
        let pos = world.get::<&Position>(e).unwrap();
        assert_eq!(pos.current, Vec2::new(60.0, -5.0));
        // previous is untouched; the step driver owns it
        assert_eq!(pos.previous, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn clamps_preserving_sign() {
        let mut vel = Velocity::new(-900.0, 800.0).with_max(750.0, 500.0);
        clamp(&mut vel);
        assert_eq!(vel.linear, Vec2::new(-750.0, 500.0));

        let mut within = Velocity::new(10.0, -10.0).with_max(750.0, 500.0);
        clamp(&mut within);
        assert_eq!(within.linear, Vec2::new(10.0, -10.0));
    }

    #[test]
    fn position_uses_clamped_velocity() {
        let mut world = World::new();
        let e = world.spawn((
            Position::new(0.0, 0.0),
            Velocity::new(2000.0, 0.0).with_max(100.0, 100.0),
        ));
        run(&mut world, 1.0, &ControlState::default());
        assert_eq!(world.get::<&Position>(e).unwrap().current.x, 100.0);
        assert_eq!(world.get::<&Velocity>(e).unwrap().linear.x, 100.0);
    }

    #[test]
    fn skips_entities_missing_a_component() {
        let mut world = World::new();
        let still = world.spawn((Position::new(1.0, 1.0),));
        let ghost = world.spawn((Velocity::new(5.0, 5.0),));
        run(&mut world, 1.0, &ControlState::default());
        assert_eq!(world.get::<&Position>(still).unwrap().current, Vec2::new(1.0, 1.0));
        assert_eq!(world.get::<&Velocity>(ghost).unwrap().linear, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn controllable_follows_input() {
        let mut world = World::new();
        let e = world.spawn((
            Position::new(0.0, 0.0),
            Velocity::new(0.0, 0.0).with_max(750.0, 500.0),
            Controllable { speed: 1000.0 },
        ));
        let controls = ControlState {
            horizontal: 1.0,
            jump: true,
        };
        run(&mut world, 0.0, &controls);
        let vel = *world.get::<&Velocity>(e).unwrap();
        // Run speed and jump impulse are both clamped to the limits
        assert_eq!(vel.linear, Vec2::new(750.0, -500.0));
    }

    #[test]
    fn no_jump_while_airborne() {
        let mut world = World::new();
        let e = world.spawn((
            Position::new(0.0, 0.0),
            Velocity::new(0.0, 120.0),
            Controllable { speed: 1000.0 },
        ));
        let controls = ControlState {
            horizontal: 0.0,
            jump: true,
        };
        run(&mut world, 0.0, &controls);
        assert_eq!(world.get::<&Velocity>(e).unwrap().linear.y, 120.0);
    }
}
