use impulse2d::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn falling_circle_settles_on_static_box() {
    let mut world = PhysicsWorld::default();

    // A long, flat static box whose top face sits at y = 0.
    let floor = RigidBody::new(
        Shape::polygon(vec![
            Vec2::new(-5.0, -1.0),
            Vec2::new(5.0, -1.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(-5.0, 0.0),
        ])
        .unwrap(),
        Vec2::ZERO,
        1.0,
    )
    .with_static();
    world.add_body("floor", floor);

    let ball = RigidBody::new(Shape::circle(0.5).unwrap(), Vec2::new(0.0, 3.0), 1.0);
    world.add_body("ball", ball);

    for _ in 0..400 {
        let weight = Vec2::new(0.0, -9.81);
        world.get_body_mut("ball").unwrap().apply_force(weight);
        world.step(DT);
        let ball = world.get_body("ball").unwrap();
        assert!(
            ball.position.y > -0.6,
            "ball tunneled through the floor: y = {}",
            ball.position.y
        );
    }

    let ball = world.get_body("ball").unwrap();
    // Resting pose: center half a radius above the face, minus at most the
    // single tick of free fall between resolution and the next correction.
    let penetration = 0.5 - ball.position.y;
    assert!(
        penetration.abs() < 0.05,
        "penetration did not converge: {penetration}"
    );
    assert!(
        ball.linear_velocity.y.abs() <= 9.81 * DT + 1e-3,
        "vertical velocity did not converge: {}",
        ball.linear_velocity.y
    );
}

#[test]
fn world_gravity_drives_the_same_settling() {
    let mut world = PhysicsWorld::default();
    world.set_gravity(Vec2::new(0.0, -9.81));
    world.add_body(
        "floor",
        RigidBody::new(Shape::rectangle(Vec2::new(5.0, 0.5)), Vec2::ZERO, 1.0).with_static(),
    );
    world.add_body(
        "ball",
        RigidBody::new(Shape::circle(0.5).unwrap(), Vec2::new(0.0, 3.0), 2.0),
    );

    for _ in 0..400 {
        world.step(DT);
    }
    let ball = world.get_body("ball").unwrap();
    assert!((ball.position.y - 1.0).abs() < 0.05, "rest y = {}", ball.position.y);
}

#[test]
fn moving_static_platform_ignores_collisions_but_follows_move() {
    let mut world = PhysicsWorld::default();
    let mut platform = RigidBody::new(Shape::rectangle(Vec2::new(2.0, 0.5)), Vec2::ZERO, 1.0);
    platform.is_moving_static = true;
    world.add_body("platform", platform);

    let mut ball = RigidBody::new(Shape::circle(0.5).unwrap(), Vec2::new(-5.0, 0.0), 1.0);
    ball.linear_velocity = Vec2::new(3.0, 0.0);
    world.add_body("ball", ball);

    for _ in 0..120 {
        world.get_body_mut("platform").unwrap().translate(Vec2::new(0.01, 0.0));
        world.step(DT);
    }

    let platform = world.get_body("platform").unwrap();
    // 120 explicit translations, nothing else.
    assert!((platform.position.x - 1.2).abs() < 1e-4);
    assert_eq!(platform.position.y, 0.0);
}

#[test]
fn two_immovable_bodies_exchange_nothing() {
    let mut world = PhysicsWorld::default();
    world.add_body(
        "a",
        RigidBody::new(Shape::rectangle(Vec2::ONE), Vec2::ZERO, 1.0).with_static(),
    );
    let mut kinematic = RigidBody::new(Shape::rectangle(Vec2::ONE), Vec2::new(0.5, 0.0), 1.0);
    kinematic.is_moving_static = true;
    world.add_body("b", kinematic);

    let contacts = world.step(DT);
    assert!(contacts.is_empty());
    assert_eq!(world.get_body("a").unwrap().position, Vec2::ZERO);
    assert_eq!(world.get_body("b").unwrap().position, Vec2::new(0.5, 0.0));
}

#[test]
fn sliding_body_with_friction_comes_to_rest() {
    let mut world = PhysicsWorld::default();
    let mut puck = RigidBody::new(Shape::circle(0.5).unwrap(), Vec2::ZERO, 1.0)
        .with_friction(0.5, 0.3);
    puck.linear_velocity = Vec2::new(4.0, 0.0);
    world.add_body("puck", puck);

    for _ in 0..400 {
        world.step(DT);
    }

    let puck = world.get_body("puck").unwrap();
    assert_eq!(puck.linear_velocity, Vec2::ZERO, "puck should stop sliding");
    assert!(puck.position.x > 0.0, "puck should have travelled before stopping");
}

#[test]
fn spinning_body_damps_to_zero_angular_velocity() {
    let mut world = PhysicsWorld::default();
    let mut body = RigidBody::new(Shape::rectangle(Vec2::ONE), Vec2::ZERO, 1.0);
    body.angular_velocity = 1.0;
    world.add_body("spinner", body);

    let mut last_rotation = 0.0;
    for _ in 0..100 {
        world.step(DT);
        let spinner = world.get_body("spinner").unwrap();
        assert!(spinner.rotation >= last_rotation, "rotation must not reverse");
        last_rotation = spinner.rotation;
    }
    assert_eq!(world.get_body("spinner").unwrap().angular_velocity, 0.0);
    assert!(last_rotation > 0.0);
}
