use glam::{Mat3, Vec3};
use crate::bodies::{BodyDynamics, BodyStore, Pose, RigidBody};
use crate::utils::PhysicsError;

#[test]
fn test_spawn_appends_in_order() {
    let mut store = BodyStore::with_capacity(4);
    assert!(store.is_empty());

    let first = store.spawn(0, Pose::at(Vec3::new(0.0, 0.0, 1.0))).unwrap();
    let second = store.spawn(1, Pose::new(Vec3::new(0.5, 0.0, 1.0), Mat3::from_rotation_x(0.3))).unwrap();

    assert_eq!((first, second), (0, 1));
    assert_eq!(store.len(), 2);
    assert_eq!(store.bodies().len(), store.dynamics().len());
    assert_eq!(store.bodies()[1].type_id, 1);
    assert_eq!(store.bodies()[1].orientation, Mat3::from_rotation_x(0.3));
    assert_eq!(store.dynamics()[0], BodyDynamics::default(), "Spawned bodies start at rest");
}

#[test]
fn test_capacity_boundary() {
    let mut store = BodyStore::with_capacity(3);
    for i in 0..3 {
        assert_eq!(store.spawn(i % 2, Pose::at(Vec3::new(i as f32, 0.0, 1.0))), Ok(i), "Spawn {} should fit", i);
    }
    assert!(store.is_full());

    let before: Vec<RigidBody> = store.bodies().to_vec();
    let result = store.spawn(0, Pose::at(Vec3::new(9.0, 9.0, 9.0)));

    assert_eq!(result, Err(PhysicsError::CapacityExceeded { capacity: 3 }));
    assert_eq!(store.len(), 3);
    assert_eq!(store.dynamics().len(), 3);
    assert_eq!(store.bodies(), &before[..], "Rejected spawn must not touch existing entries");
}

#[test]
fn test_spawn_with_dynamics_and_set_velocity() {
    let mut store = BodyStore::with_capacity(2);
    let moving = BodyDynamics::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0));
    let index = store.spawn_with_dynamics(0, Pose::at(Vec3::Z), moving).unwrap();
    assert_eq!(store.get(index).unwrap().1, &moving);

    store.set_velocity(index, Vec3::ZERO, Vec3::X).unwrap();
    assert_eq!(store.dynamics()[index], BodyDynamics::new(Vec3::ZERO, Vec3::X));

    assert_eq!(store.set_velocity(5, Vec3::ZERO, Vec3::ZERO), Err(PhysicsError::InvalidBodyIndex(5)));
    assert!(store.get(5).is_none());
}

#[test]
fn test_point_velocity() {
    let dynamics = BodyDynamics::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    // Spinning about z, a point at +x moves along +y.
    assert_eq!(dynamics.point_velocity(Vec3::X), Vec3::new(1.0, 1.0, 0.0));
}
