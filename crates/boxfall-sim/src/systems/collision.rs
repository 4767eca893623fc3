//! Collision detection and resolution for axis-aligned boxes.
//!
//! Every rigid or static collider is an obstacle, wherever it sits in the
//! scene order. Each dynamic body is tested against all obstacles:
//!   - Rigid: swept per-axis resolution. The body's previous and current
//!     edges tell which side it entered from; it is snapped flush to that
//!     side and its velocity on that axis is zeroed.
//!   - Static: overlap is reported, nothing is moved.
//!
//! Obstacles are applied in scene order. When one body hits several
//! obstacles in a step, later corrections overwrite earlier ones.

use hecs::{Entity, World};

use boxfall_core::components::{Collider, Dimensions, Position, Velocity};
use boxfall_core::enums::ColliderKind;
use boxfall_core::types::BoundingBox;

use crate::accessor;

/// Axes on which a body was snapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    pub x: bool,
    pub y: bool,
}

/// One body/obstacle overlap found in a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub entity: Entity,
    pub obstacle: Entity,
    pub obstacle_kind: ColliderKind,
    pub resolved: Resolution,
}

#[derive(Debug, Default)]
pub struct CollisionReport {
    pub contacts: Vec<Contact>,
}

struct Obstacle {
    entity: Entity,
    bounds: BoundingBox,
    kind: ColliderKind,
}

/// Run one collision pass over the scene, in `order`.
pub fn run(world: &mut World, order: &[Entity]) -> CollisionReport {
    let mut report = CollisionReport::default();

    for (_entity, collider) in world.query_mut::<&mut Collider>() {
        collider.is_colliding = false;
    }

    let obstacles: Vec<Obstacle> = order
        .iter()
        .filter_map(|&entity| {
            let (kind, current, _) = collider_boxes(world, entity)?;
            kind.is_obstacle().then_some(Obstacle {
                entity,
                bounds: current,
                kind,
            })
        })
        .collect();

    if obstacles.is_empty() {
        return report;
    }

    // (entity, current box, previous box)
    let bodies: Vec<(Entity, BoundingBox, BoundingBox)> = order
        .iter()
        .filter_map(|&entity| {
            let (kind, current, previous) = collider_boxes(world, entity)?;
            (kind == ColliderKind::Dynamic).then_some((entity, current, previous))
        })
        .collect();

    let mut touched: Vec<Entity> = Vec::new();

    for (entity, current, previous) in bodies {
        let hits: Vec<&Obstacle> = obstacles
            .iter()
            .filter(|obstacle| obstacle.bounds.intersects(&current))
            .collect();
        if hits.is_empty() {
            continue;
        }

        // Without a velocity the body is only detected, never resolved
        let mut body = world
            .query_one_mut::<(&mut Position, &mut Velocity)>(entity)
            .ok();

        for obstacle in hits {
            let resolved = match body.as_mut() {
                Some((pos, vel)) if obstacle.kind == ColliderKind::Rigid => {
                    resolve_rigid(pos, vel, &current, &previous, &obstacle.bounds)
                }
                _ => Resolution::default(),
            };
            report.contacts.push(Contact {
                entity,
                obstacle: obstacle.entity,
                obstacle_kind: obstacle.kind,
                resolved,
            });
            touched.push(obstacle.entity);
        }
        touched.push(entity);
    }

    for entity in touched {
        if let Some(mut collider) = accessor::component_mut::<Collider>(world, entity) {
            collider.is_colliding = true;
        }
    }

    report
}

/// Collider kind plus current and previous boxes, if the entity has a
/// collider, a position and dimensions.
fn collider_boxes(world: &World, entity: Entity) -> Option<(ColliderKind, BoundingBox, BoundingBox)> {
    let kind = accessor::component::<Collider>(world, entity)?.kind;
    let pos = *accessor::component::<Position>(world, entity)?;
    let dims = *accessor::component::<Dimensions>(world, entity)?;
    Some((
        kind,
        dims.bounding_box(pos.current),
        dims.bounding_box(pos.previous),
    ))
}

/// Swept resolution of one body against one rigid obstacle.
///
/// An axis is only considered while the body still moves on it. The
/// velocity is read live, so a correction from an earlier obstacle can
/// close the gate for a later one; `current` and `previous` stay as
/// computed at the start of the pass.
pub fn resolve_rigid(
    pos: &mut Position,
    vel: &mut Velocity,
    current: &BoundingBox,
    previous: &BoundingBox,
    obstacle: &BoundingBox,
) -> Resolution {
    let mut resolved = Resolution::default();

    if vel.linear.x != 0.0 {
        // Entered through the obstacle's left side
        if current.right() >= obstacle.left() && previous.right() <= obstacle.left() {
            pos.current.x = obstacle.left() - current.width;
            vel.linear.x = 0.0;
            resolved.x = true;
        }
        // Entered through its right side
        if current.left() <= obstacle.right() && previous.left() >= obstacle.right() {
            pos.current.x = obstacle.right();
            vel.linear.x = 0.0;
            resolved.x = true;
        }
    }

    if vel.linear.y != 0.0 {
        // Landed on top
        if current.bottom() >= obstacle.top() && previous.bottom() <= obstacle.top() {
            pos.current.y = obstacle.top() - current.height;
            vel.linear.y = 0.0;
            resolved.y = true;
        }
        // Hit from below
        if current.top() <= obstacle.bottom() && previous.top() >= obstacle.bottom() {
            pos.current.y = obstacle.bottom();
            vel.linear.y = 0.0;
            resolved.y = true;
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxfall_core::types::Vec2;

    fn body_at(previous: Vec2, current: Vec2) -> Position {
        Position { current, previous }
    }

    #[test]
    fn snaps_to_left_side() {
        let mut pos = body_at(Vec2::new(30.0, 10.0), Vec2::new(40.0, 10.0));
        let mut vel = Velocity::new(600.0, 0.0);
        let dims = Dimensions::new(10.0, 10.0);
        let obstacle = BoundingBox::new(50.0, 0.0, 50.0, 100.0);

        let current = dims.bounding_box(pos.current);

        let previous = dims.bounding_box(pos.previous);

        let resolved = resolve_rigid(
            &mut pos,
            &mut vel,
            &current,
            &previous,
            &obstacle,

        );

        assert_eq!(resolved, Resolution { x: true, y: false });
        assert_eq!(pos.current.x, 40.0);
        assert_eq!(vel.linear.x, 0.0);
    }

    #[test]
    fn snaps_to_right_side() {
        let mut pos = body_at(Vec2::new(105.0, 10.0), Vec2::new(95.0, 10.0));
        let mut vel = Velocity::new(-600.0, 0.0);
        let dims = Dimensions::new(10.0, 10.0);
        let obstacle = BoundingBox::new(50.0, 0.0, 50.0, 100.0);

        let current = dims.bounding_box(pos.current);

        let previous = dims.bounding_box(pos.previous);

        resolve_rigid(
            &mut pos,
            &mut vel,
            &current,
            &previous,
            &obstacle,

        );

        assert_eq!(pos.current.x, 100.0);
        assert_eq!(vel.linear.x, 0.0);
    }

    #[test]
    fn lands_on_top_and_bumps_from_below() {
        let dims = Dimensions::new(10.0, 25.0);
        let obstacle = BoundingBox::new(0.0, 300.0, 200.0, 20.0);

        let mut falling = body_at(Vec2::new(50.0, 255.0), Vec2::new(50.0, 285.0));
        let mut vel = Velocity::new(0.0, 300.0);
        let current = dims.bounding_box(falling.current);
        let previous = dims.bounding_box(falling.previous);
        resolve_rigid(
            &mut falling,
            &mut vel,
            &current,
            &previous,
            &obstacle,
        );
        assert_eq!(falling.current.y, 275.0);
        assert_eq!(vel.linear.y, 0.0);

        let mut rising = body_at(Vec2::new(50.0, 322.0), Vec2::new(50.0, 315.0));
        let mut vel = Velocity::new(0.0, -300.0);
        let current = dims.bounding_box(rising.current);
        let previous = dims.bounding_box(rising.previous);
        resolve_rigid(
            &mut rising,
            &mut vel,
            &current,
            &previous,
            &obstacle,
        );
        assert_eq!(rising.current.y, 320.0);
        assert_eq!(vel.linear.y, 0.0);
    }

    #[test]
    fn deep_overlap_is_not_pushed_out() {
        // Already inside on both steps: no side was crossed
        let mut pos = body_at(Vec2::new(60.0, 20.0), Vec2::new(62.0, 22.0));
        let mut vel = Velocity::new(120.0, 120.0);
        let dims = Dimensions::new(10.0, 10.0);
        let obstacle = BoundingBox::new(50.0, 0.0, 50.0, 100.0);

        let current = dims.bounding_box(pos.current);

        let previous = dims.bounding_box(pos.previous);

        let resolved = resolve_rigid(
            &mut pos,
            &mut vel,
            &current,
            &previous,
            &obstacle,

        );

        assert_eq!(resolved, Resolution::default());
        assert_eq!(pos.current, Vec2::new(62.0, 22.0));
        assert_eq!(vel.linear, Vec2::new(120.0, 120.0));
    }

    #[test]
    fn zero_axis_velocity_skips_that_axis() {
        // Crossed the top edge, but vertical velocity is zero
        let mut pos = body_at(Vec2::new(50.0, 255.0), Vec2::new(50.0, 285.0));
        let mut vel = Velocity::new(0.0, 0.0);
        let dims = Dimensions::new(10.0, 25.0);
        let obstacle = BoundingBox::new(0.0, 300.0, 200.0, 20.0);

        let current = dims.bounding_box(pos.current);

        let previous = dims.bounding_box(pos.previous);

        let resolved = resolve_rigid(
            &mut pos,
            &mut vel,
            &current,
            &previous,
            &obstacle,

        );

        assert_eq!(resolved, Resolution::default());
        assert_eq!(pos.current.y, 285.0);
    }

    #[test]
    fn pass_marks_both_parties() {
        let mut world = World::new();
        let floor = world.spawn((
            Position::new(0.0, 100.0),
            Dimensions::new(200.0, 10.0),
            Collider::new(ColliderKind::Rigid),
        ));
        let body = world.spawn((
            Position {
                previous: Vec2::new(10.0, 80.0),
                current: Vec2::new(10.0, 95.0),
            },
            Dimensions::new(10.0, 10.0),
            Velocity::new(0.0, 200.0),
            Collider::new(ColliderKind::Dynamic),
        ));
        let far = world.spawn((
            Position::new(500.0, 500.0),
            Dimensions::new(10.0, 10.0),
            Collider::new(ColliderKind::Rigid),
        ));

        let report = run(&mut world, &[floor, body, far]);

        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.contacts[0].obstacle, floor);
        assert!(report.contacts[0].resolved.y);
        assert!(world.get::<&Collider>(floor).unwrap().is_colliding);
        assert!(world.get::<&Collider>(body).unwrap().is_colliding);
        assert!(!world.get::<&Collider>(far).unwrap().is_colliding);
        assert_eq!(world.get::<&Position>(body).unwrap().current.y, 90.0);
    }

    #[test]
    fn flags_are_cleared_each_pass() {
        let mut world = World::new();
        let wall = world.spawn((
            Position::new(0.0, 0.0),
            Dimensions::new(10.0, 10.0),
            Collider {
                kind: ColliderKind::Static,
                is_colliding: true,
            },
        ));
        let report = run(&mut world, &[wall]);
        assert!(report.contacts.is_empty());
        assert!(!world.get::<&Collider>(wall).unwrap().is_colliding);
    }

    #[test]
    fn body_without_velocity_is_detected_only() {
        let mut world = World::new();
        let block = world.spawn((
            Position::new(0.0, 0.0),
            Dimensions::new(50.0, 50.0),
            Collider::new(ColliderKind::Rigid),
        ));
        let crate_ = world.spawn((
            Position {
                previous: Vec2::new(10.0, -20.0),
                current: Vec2::new(10.0, -5.0),
            },
            Dimensions::new(10.0, 10.0),
            Collider::new(ColliderKind::Dynamic),
        ));

        let report = run(&mut world, &[block, crate_]);

        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.contacts[0].resolved, Resolution::default());
        assert_eq!(world.get::<&Position>(crate_).unwrap().current.y, -5.0);
        assert!(world.get::<&Collider>(crate_).unwrap().is_colliding);
    }
}
