// src/integrators/renormalise_tests.rs

use approx::assert_abs_diff_eq;
use glam::{Mat3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::integrators::renormalise;
use crate::utils::orthonormality_error;

fn max_entry_difference(a: Mat3, b: Mat3) -> f32 {
    (a - b).to_cols_array().iter().fold(0.0_f32, |acc, e| acc.max(e.abs()))
}

fn random_rotation(rng: &mut StdRng) -> Mat3 {
    Mat3::from_rotation_z(rng.random_range(-3.0..3.0))
        * Mat3::from_rotation_y(rng.random_range(-3.0..3.0))
        * Mat3::from_rotation_x(rng.random_range(-3.0..3.0))
}

#[test]
fn test_identity_is_fixed_point() {
    assert_eq!(renormalise(Mat3::IDENTITY), Mat3::IDENTITY);
}

#[test]
fn test_orthonormal_input_is_unchanged() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let rotation = random_rotation(&mut rng);
        let fixed = renormalise(rotation);
        assert!(
            max_entry_difference(rotation, fixed) < 1e-6,
            "Renormalising a rotation moved it by {}", max_entry_difference(rotation, fixed)
        );
    }
}

#[test]
fn test_one_pass_reduces_error_by_an_order_of_magnitude() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let rotation = random_rotation(&mut rng);
        let mut perturbed = rotation.to_cols_array();
        for entry in perturbed.iter_mut() {
            *entry += rng.random_range(-0.01..0.01);
        }
        let perturbed = Mat3::from_cols_array(&perturbed);

        let before = orthonormality_error(perturbed);
        let after = orthonormality_error(renormalise(perturbed));
        assert!(after * 10.0 <= before, "Error only went from {} to {}", before, after);
    }
}

#[test]
fn test_repeated_passes_converge() {
    let drifted = Mat3::from_rotation_x(0.9) * Mat3::from_diagonal(Vec3::new(1.03, 0.98, 1.02)) + Mat3::from_cols(
        Vec3::new(0.0, 0.01, -0.02),
        Vec3::new(0.015, 0.0, 0.0),
        Vec3::ZERO,
    );
    let mut m = drifted;
    for _ in 0..4 {
        m = renormalise(m);
    }
    assert!(orthonormality_error(m) < 1e-6);
    assert!(m.determinant() > 0.0, "Correction must not flip handedness");
}

#[test]
fn test_columns_become_unit_length() {
    let stretched = Mat3::from_diagonal(Vec3::new(1.005, 0.997, 1.002));
    let fixed = renormalise(stretched);
    assert_abs_diff_eq!(fixed.x_axis.length(), 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(fixed.y_axis.length(), 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(fixed.z_axis.length(), 1.0, epsilon = 1e-4);
}
