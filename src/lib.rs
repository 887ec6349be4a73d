//! Fixed-timestep rigid-body kernel for ellipsoidal fruit falling into a box.
//!
//! Each substep runs gravity, a contact velocity solve against the floor,
//! semi-implicit position and orientation integration, and a position
//! projection out of the floor. See [`simulation::step`] for the pipeline and
//! [`simulation::Simulation`] for the host-facing state.
pub mod utils;
pub mod catalog;
pub mod bodies;
pub mod interactions;
pub mod constraints;
pub mod integrators;
pub mod simulation;

/// ### General helper function
/// - Asserts that two floating point numbers are approximately equal.
///
/// ### Arguments
///
/// * `a` - The first floating point number.
/// * `b` - The second floating point number.
/// * `epsilon` - The maximum difference between `a` and `b` for them to be considered equal.
/// * `optional_message` - An optional message to display if the assertion fails.
///
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!((a - b).abs() < epsilon, "a: {:?},\nb: {:?},\nepsilon: {:?},\n message: {:?}", a, b, epsilon, message),
        None => assert!((a - b).abs() < epsilon, "Expected {} to be approximately equal to {} (epsilon: {})", a, b, epsilon),
    }
}
