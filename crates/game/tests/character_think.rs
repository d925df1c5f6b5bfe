use emberfall_game::{ButtonState, Side, Simulation, SimulationConfig};
use emberfall_physics::ContentFlags;
use glam::Vec3;

fn client_sim() -> Simulation {
    let mut sim = Simulation::new(Side::Client, SimulationConfig::default());
    sim.physics.collision.add_box(
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(200.0, 0.5, 200.0),
        ContentFlags::SOLID,
    );
    sim
}

#[test]
fn owned_character_lands_and_walks() {
    let mut sim = client_sim();
    let dt = sim.config.delta_time();
    let user = sim.spawn_user();
    let character = sim.spawn_character(Some(user));
    sim.respawn(character);

    // Fall from the spawn point and settle on the floor
    for _ in 0..60 {
        sim.tick(dt);
    }
    let entity = sim.registry.get(character).unwrap();
    let movement = entity.movement.as_ref().unwrap();
    assert!(movement.ground_memory.is_some(), "should have landed");
    assert_eq!(movement.velocity.y, 0.0);

    // Walk forward
    sim.set_buttons(
        user,
        ButtonState {
            wish_dir: Vec3::new(1.0, 0.0, 0.0),
            ..Default::default()
        },
    );
    let start_x = sim
        .registry
        .get(character)
        .unwrap()
        .movement
        .as_ref()
        .unwrap()
        .origin
        .x;
    let walk_speed = sim.config.movement.walk_speed;
    for _ in 0..300 {
        sim.tick(dt);
        let m = sim.registry.get(character).unwrap().movement.as_ref().unwrap();
        let horizontal = Vec3::new(m.velocity.x, 0.0, m.velocity.z).length();
        assert!(horizontal <= walk_speed + 1e-3);
    }

    let entity = sim.registry.get(character).unwrap();
    let movement = entity.movement.as_ref().unwrap();
    assert!(movement.origin.x > start_x + 10.0, "should have traveled");
    let horizontal = Vec3::new(movement.velocity.x, 0.0, movement.velocity.z).length();
    assert!(horizontal > walk_speed * 0.9);
}

#[test]
fn jump_launches_and_returns_to_ground() {
    let mut sim = client_sim();
    let dt = sim.config.delta_time();
    let user = sim.spawn_user();
    let character = sim.spawn_character(Some(user));
    sim.respawn(character);

    for _ in 0..60 {
        sim.tick(dt);
    }
    assert!(sim
        .registry
        .get(character)
        .unwrap()
        .movement
        .as_ref()
        .unwrap()
        .ground_memory
        .is_some());

    // One tick of jump input
    sim.set_buttons(
        user,
        ButtonState {
            jump: true,
            ..Default::default()
        },
    );
    sim.tick(dt);
    sim.set_buttons(user, ButtonState::default());

    let entity = sim.registry.get(character).unwrap();
    let m = entity.movement.as_ref().unwrap();
    assert_eq!(m.velocity.y, sim.config.movement.jump_power);
    assert!(m.ground_memory.is_none(), "jump tick is airborne");

    // Fly the arc and land again
    for _ in 0..200 {
        sim.tick(dt);
    }
    let entity = sim.registry.get(character).unwrap();
    let m = entity.movement.as_ref().unwrap();
    assert!(m.ground_memory.is_some(), "should land after the arc");
    assert_eq!(m.velocity.y, 0.0);
}

#[test]
fn character_stays_parked_until_respawn() {
    let mut sim = client_sim();
    let dt = sim.config.delta_time();
    let user = sim.spawn_user();
    let character = sim.spawn_character(Some(user));

    sim.set_buttons(
        user,
        ButtonState {
            wish_dir: Vec3::new(1.0, 0.0, 0.0),
            jump: true,
            ..Default::default()
        },
    );
    for _ in 0..30 {
        sim.tick(dt);
    }

    // Anchored proxy short-circuits the whole tick: no state change
    let entity = sim.registry.get(character).unwrap();
    let body = entity.movement.as_ref().unwrap().body.unwrap();
    assert_eq!(sim.physics.body(body).unwrap().position.y, 1000.0);
    assert_eq!(entity.movement.as_ref().unwrap().velocity, Vec3::ZERO);
}

#[test]
fn view_position_tracks_the_live_proxy() {
    let mut sim = client_sim();
    let dt = sim.config.delta_time();
    let user = sim.spawn_user();
    let character = sim.spawn_character(Some(user));
    sim.respawn(character);

    for _ in 0..60 {
        sim.tick(dt);
    }

    let entity = sim.registry.get(character).unwrap();
    let view = entity.view_position(Side::Client, &sim.physics).unwrap();
    let body = entity.movement.as_ref().unwrap().body.unwrap();
    let center = sim.physics.body(body).unwrap().position;
    assert_eq!(view, center + Vec3::new(0.0, 2.0, 0.0));
}
