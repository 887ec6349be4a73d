mod body_type;
mod body_catalog;

pub use body_type::*;
pub use body_catalog::*;
