use glam::{Mat3, Vec3};

/// Builds the skew-symmetric "screw" matrix of an angular velocity.
///
/// The result `W` satisfies `W * v == w.cross(v)` for every `v`:
/// ```text
/// W = [ 0  -w3  w2 ]
///     [ w3  0  -w1 ]
///     [-w2  w1  0  ]
/// ```
///
/// # Example
/// ```
/// use glam::Vec3;
/// use melon_physics::utils::skew;
///
/// let w = Vec3::new(1.0, 2.0, 3.0);
/// let v = Vec3::new(-0.5, 4.0, 0.25);
/// assert!((skew(w) * v - w.cross(v)).length() < 1e-6);
/// ```
#[inline]
pub fn skew(w: Vec3) -> Mat3 {
    // glam is column-major, so these are the columns of W
    Mat3::from_cols(
        Vec3::new(0.0, w.z, -w.y),
        Vec3::new(-w.z, 0.0, w.x),
        Vec3::new(w.y, -w.x, 0.0),
    )
}

/// Rotates a body-local inverse inertia tensor into world axes: `R * I * R^T`.
#[inline]
pub fn to_world_inertia(orientation: Mat3, local_inverse_inertia: Mat3) -> Mat3 {
    orientation * local_inverse_inertia * orientation.transpose()
}

/// Frobenius norm of `M^T M - I`.
///
/// Zero for an exact rotation (or reflection); grows with drift away from
/// orthonormality.
pub fn orthonormality_error(m: Mat3) -> f32 {
    let d = m.as_dmat3();
    let gram = d.transpose() * d;
    let residual = [
        gram.x_axis.x - 1.0, gram.x_axis.y, gram.x_axis.z,
        gram.y_axis.x, gram.y_axis.y - 1.0, gram.y_axis.z,
        gram.z_axis.x, gram.z_axis.y, gram.z_axis.z - 1.0,
    ];
    residual.iter().map(|e| e * e).sum::<f64>().sqrt() as f32
}

/// True when `m` is a proper rotation within `tolerance`.
pub fn is_rotation(m: Mat3, tolerance: f32) -> bool {
    m.is_finite() && orthonormality_error(m) <= tolerance && m.determinant() > 0.0
}
