// src/integrators/renormalise.rs

use glam::{DMat3, DVec3, Mat3};

/// Pulls a nearly orthonormal matrix back onto the rotation manifold.
///
/// This is a first-order correction, not a full Gram-Schmidt or polar
/// decomposition: each column is scaled by `1 - (|c|^2 - 1) / 2` (the linear
/// term of `1 / |c|`), then each column has half of its overlap with the other
/// two removed. Residual error after one pass is second order in the input
/// error, so it only converges from a matrix that is already close to a
/// rotation. Intermediates are `f64`; no allocation.
///
/// # Example
/// ```
/// use glam::{Mat3, Vec3};
/// use melon_physics::integrators::renormalise;
/// use melon_physics::utils::orthonormality_error;
///
/// let drifted = Mat3::from_rotation_z(0.5) * Mat3::from_diagonal(Vec3::new(1.01, 0.995, 1.0));
/// let fixed = renormalise(drifted);
/// assert!(orthonormality_error(fixed) < orthonormality_error(drifted) / 10.0);
/// ```
pub fn renormalise(m: Mat3) -> Mat3 {
    let d = m.as_dmat3();
    let (mut a, mut b, mut c) = (d.x_axis, d.y_axis, d.z_axis);

    a *= 1.0 - 0.5 * (a.length_squared() - 1.0);
    b *= 1.0 - 0.5 * (b.length_squared() - 1.0);
    c *= 1.0 - 0.5 * (c.length_squared() - 1.0);

    let ab = 0.5 * a.dot(b);
    let ac = 0.5 * a.dot(c);
    let bc = 0.5 * b.dot(c);

    let fixed: [DVec3; 3] = [
        a - ab * b - ac * c,
        b - ab * a - bc * c,
        c - ac * a - bc * b,
    ];
    DMat3::from_cols(fixed[0], fixed[1], fixed[2]).as_mat3()
}
