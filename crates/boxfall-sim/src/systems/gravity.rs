use hecs::World;

use boxfall_core::components::{Gravity, Velocity};

/// Apply gravitational acceleration to every entity with Gravity + Velocity.
/// Positive Y points down, so gravity adds to the vertical velocity.
/// No clamping here; movement clamps on the next step.
pub fn run(world: &mut World, dt_secs: f32, gravity: f32) {
    for (_entity, (weight, vel)) in world.query_mut::<(&Gravity, &mut Velocity)>() {
        vel.linear.y += gravity * weight.mass * dt_secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxfall_core::components::Position;

    #[test]
    fn accelerates_downward_by_mass() {
        let mut world = World::new();
        let light = world.spawn((Gravity { mass: 1.0 }, Velocity::new(0.0, 0.0)));
        let heavy = world.spawn((Gravity { mass: 80.0 }, Velocity::new(3.0, -10.0)));

        run(&mut world, 0.5, 10.0);

        assert_eq!(world.get::<&Velocity>(light).unwrap().linear.y, 5.0);
        let vel = world.get::<&Velocity>(heavy).unwrap();
        assert_eq!(vel.linear.y, -10.0 + 400.0);
        assert_eq!(vel.linear.x, 3.0);
    }

    #[test]
    fn ignores_entities_without_gravity_or_velocity() {
        let mut world = World::new();
        let drifting = world.spawn((Velocity::new(0.0, 0.0), Position::new(0.0, 0.0)));
        let anchored = world.spawn((Gravity { mass: 5.0 },));

        run(&mut world, 1.0, 9.81);

        assert_eq!(world.get::<&Velocity>(drifting).unwrap().linear.y, 0.0);
        assert!(world.get::<&Velocity>(anchored).is_err());
    }

    #[test]
    fn does_not_clamp() {
        let mut world = World::new();
        let e = world.spawn((
            Gravity { mass: 100.0 },
            Velocity::new(0.0, 490.0).with_max(0.0, 500.0),
        ));
        run(&mut world, 1.0, 9.81);
        assert!(world.get::<&Velocity>(e).unwrap().linear.y > 500.0);
    }
}
