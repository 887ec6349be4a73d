use approx::assert_abs_diff_eq;
use glam::{Mat3, Vec3};
use crate::bodies::Pose;
use crate::catalog::BodyCatalog;
use crate::simulation::Simulation;
use crate::utils::PhysicsConstants;

#[test]
fn test_instances_follow_store_order() {
    let mut sim = Simulation::new(BodyCatalog::fruit().unwrap(), PhysicsConstants::default()).unwrap();
    sim.spawn(1, Pose::new(Vec3::new(1.0, 2.0, 3.0), Mat3::from_rotation_z(0.5))).unwrap();
    sim.spawn(0, Pose::at(Vec3::new(-1.0, 0.0, 0.5))).unwrap();

    let view = sim.render_view();
    assert_eq!(view.len(), 2);

    let instances: Vec<_> = view.instances().collect();
    assert_eq!(instances[0].type_id, 1);
    assert_eq!(instances[0].radii, Vec3::new(0.14, 0.2, 0.14));
    assert_eq!(instances[0].colour, [0.0, 1.0, 0.0]);
    assert_eq!(instances[0].orientation, Mat3::from_rotation_z(0.5));
    assert_eq!(instances[1].position, Vec3::new(-1.0, 0.0, 0.5));
    assert_eq!(instances[1].colour, [1.0, 0.0, 0.0]);
}

#[test]
fn test_instance_transform_maps_unit_sphere() {
    let mut sim = Simulation::new(BodyCatalog::fruit().unwrap(), PhysicsConstants::default()).unwrap();
    let orientation = Mat3::from_rotation_z(std::f32::consts::FRAC_PI_2);
    sim.spawn(1, Pose::new(Vec3::new(1.0, 2.0, 3.0), orientation)).unwrap();

    let instance = sim.render_view().instances().next().unwrap();
    let transform = instance.instance_transform();

    // The unit sphere's +y pole lands on the melon's long axis, turned onto world -x.
    let pole = transform.transform_point3(Vec3::Y);
    assert_abs_diff_eq!(pole.x, 1.0 - 0.2, epsilon = 1e-6);
    assert_abs_diff_eq!(pole.y, 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(pole.z, 3.0, epsilon = 1e-6);
    assert_eq!(transform.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_write_instance_transforms() {
    let mut sim = Simulation::new(BodyCatalog::fruit().unwrap(), PhysicsConstants::default()).unwrap();
    let mut buffer = vec![[9.0; 16]; 5];
    sim.render_view().write_instance_transforms(&mut buffer);
    assert!(buffer.is_empty());

    sim.spawn(0, Pose::at(Vec3::new(0.0, 0.0, 0.5))).unwrap();
    sim.render_view().write_instance_transforms(&mut buffer);
    assert_eq!(buffer.len(), 1);
    // Column-major: scale on the diagonal, translation in the last column.
    assert_abs_diff_eq!(buffer[0][0], 0.1, epsilon = 1e-7);
    assert_abs_diff_eq!(buffer[0][5], 0.1, epsilon = 1e-7);
    assert_abs_diff_eq!(buffer[0][10], 0.1, epsilon = 1e-7);
    assert_eq!(&buffer[0][12..], &[0.0, 0.0, 0.5, 1.0]);
}
