//! Body control the hold machine drives, plus a tiny ballistic step so
//! thrown objects come down again.

use {
    bar_components::{BodyMode, RigidBody},
    bevy::{ecs::system::SystemParam, prelude::*},
};

pub const GRAVITY: f32 = -9.82;
pub const FLOOR_HEIGHT: f32 = 0.0;

pub trait PhysicsBodies {
    /// `false` takes the body out of the simulation entirely.
    fn set_dynamic(&mut self, object: Entity, dynamic: bool);
    fn set_velocity(&mut self, object: Entity, velocity: Vec3);
    /// Pins the object static at the given pose with no velocity.
    fn freeze_at(&mut self, object: Entity, position: Vec3, rotation: Quat);
}

#[derive(SystemParam)]
pub struct BodyControl<'w, 's> {
    bodies: Query<'w, 's, (&'static mut Transform, Option<&'static mut RigidBody>)>,
}

impl PhysicsBodies for BodyControl<'_, '_> {
    fn set_dynamic(&mut self, object: Entity, dynamic: bool) {
        let Ok((_, Some(mut body))) = self.bodies.get_mut(object) else {
            return;
        };
        body.mode = if dynamic {
            BodyMode::Dynamic
        } else {
            BodyMode::Disabled
        };
        if !dynamic {
            body.velocity = Vec3::ZERO;
        }
    }

    fn set_velocity(&mut self, object: Entity, velocity: Vec3) {
        if let Ok((_, Some(mut body))) = self.bodies.get_mut(object) {
            body.velocity = velocity;
        }
    }

    fn freeze_at(&mut self, object: Entity, position: Vec3, rotation: Quat) {
        let Ok((mut transform, body)) = self.bodies.get_mut(object) else {
            return;
        };
        transform.translation = position;
        transform.rotation = rotation;
        if let Some(mut body) = body {
            body.mode = BodyMode::Static;
            body.velocity = Vec3::ZERO;
        }
    }
}

/// Integrates one step for a dynamic body. Returns `true` when it touched
/// the floor and came to rest.
pub fn step_body(body: &mut RigidBody, transform: &mut Transform, dt: f32) -> bool {
    if body.mode != BodyMode::Dynamic {
        return false;
    }
    body.velocity.y += GRAVITY * dt;
    transform.translation += body.velocity * dt;

    if transform.translation.y <= FLOOR_HEIGHT {
        transform.translation.y = FLOOR_HEIGHT;
        body.velocity = Vec3::ZERO;
        body.mode = BodyMode::Static;
        return true;
    }
    false
}

pub fn simulate_bodies(time: Res<Time>, mut bodies: Query<(Entity, &mut RigidBody, &mut Transform)>) {
    let dt = time.delta_secs();
    for (entity, mut body, mut transform) in &mut bodies {
        if body.mode == BodyMode::Dynamic && step_body(&mut body, &mut transform, dt) {
            debug!("{:?} came to rest at {}", entity, transform.translation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_body_falls() {
        let mut body = RigidBody {
            mode: BodyMode::Dynamic,
            velocity: Vec3::new(1.0, 0.0, 0.0),
        };
        let mut transform = Transform::from_xyz(0.0, 2.0, 0.0);

        let landed = step_body(&mut body, &mut transform, 0.1);

        assert!(!landed);
        assert!(transform.translation.y < 2.0);
        assert!(transform.translation.x > 0.0);
        assert!(body.velocity.y < 0.0);
    }

    #[test]
    fn test_body_comes_to_rest_on_floor() {
        let mut body = RigidBody {
            mode: BodyMode::Dynamic,
            velocity: Vec3::new(0.0, -5.0, 0.0),
        };
        let mut transform = Transform::from_xyz(0.0, 0.1, 0.0);

        assert!(step_body(&mut body, &mut transform, 0.1));
        assert_eq!(transform.translation.y, FLOOR_HEIGHT);
        assert_eq!(body.mode, BodyMode::Static);
        assert_eq!(body.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_static_and_disabled_bodies_stay_put() {
        for mode in [BodyMode::Static, BodyMode::Disabled] {
            let mut body = RigidBody {
                mode,
                velocity: Vec3::ZERO,
            };
            let mut transform = Transform::from_xyz(0.0, 1.0, 0.0);
            assert!(!step_body(&mut body, &mut transform, 0.5));
            assert_eq!(transform.translation.y, 1.0);
        }
    }
}
