mod step;
mod world;
mod render_view;

pub use step::*;
pub use world::*;
pub use render_view::*;

#[cfg(test)]
mod render_view_tests;
