use emberfall_physics::{ButtonState, MovementController, PhysicsWorld};
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;
const HIP: f32 = 2.0;

/// Air acceleration has its own tuning: a tiny target speed but a huge
/// acceleration constant. Any single direction caps out almost
/// immediately, yet repeated direction changes keep adding speed
/// perpendicular to the current velocity - which is how air-strafing
/// overtakes ground speed.
#[test]
fn direction_changes_build_speed_past_walk_speed() {
    let controller = MovementController::default();
    let mut world = PhysicsWorld::new(60.0); // bottomless
    let body = world.spawn_body(Vec3::new(0.0, 500.0, 0.0), Vec3::new(1.0, 1.5, 1.0), 1.0, false);
    let mut memory = None;

    for _ in 0..200 {
        let velocity = world.body(body).unwrap().velocity;
        let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);
        // Strafe perpendicular to where we are currently going
        let wish_dir = if horizontal.length_squared() > 0.0 {
            Vec3::Y.cross(horizontal).normalize()
        } else {
            Vec3::new(1.0, 0.0, 0.0)
        };

        let result = controller
            .update(
                &mut world,
                body,
                &mut memory,
                HIP,
                &ButtonState {
                    wish_dir,
                    ..Default::default()
                },
                DT,
            )
            .unwrap();
        assert!(!result.grounded);
        world.step(DT);
    }

    let velocity = world.body(body).unwrap().velocity;
    let horizontal = Vec3::new(velocity.x, 0.0, velocity.z).length();
    assert!(
        horizontal > controller.config.walk_speed,
        "air strafing should exceed walk speed, got {horizontal}"
    );
    // Gravity acted the whole time, untouched by air control
    assert!(velocity.y < 0.0);
}

/// Holding one direction in the air is nearly useless: speed along the
/// wish direction is capped at the strafe target.
#[test]
fn single_direction_air_input_is_capped() {
    let controller = MovementController::default();
    let mut world = PhysicsWorld::new(60.0);
    let body = world.spawn_body(Vec3::new(0.0, 500.0, 0.0), Vec3::new(1.0, 1.5, 1.0), 1.0, false);
    let mut memory = None;

    let buttons = ButtonState {
        wish_dir: Vec3::new(1.0, 0.0, 0.0),
        ..Default::default()
    };
    for _ in 0..200 {
        let _ = controller.update(&mut world, body, &mut memory, HIP, &buttons, DT);
        world.step(DT);
    }

    let velocity = world.body(body).unwrap().velocity;
    assert!(velocity.x <= controller.config.side_strafe_speed + 1e-3);
}
