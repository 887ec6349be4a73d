mod velocity_solver;
mod position_solver;

pub use velocity_solver::*;
pub use position_solver::*;

#[cfg(test)]
mod position_solver_tests;
