mod ellipsoid_plane;

pub use ellipsoid_plane::*;
