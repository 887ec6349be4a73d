mod rigid_body;
mod body_store;

pub use rigid_body::*;
pub use body_store::*;

#[cfg(test)]
mod body_store_tests;
