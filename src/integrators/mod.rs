mod renormalise;
mod integrator;

pub use renormalise::*;
pub use integrator::*;

#[cfg(test)]
mod renormalise_tests;
