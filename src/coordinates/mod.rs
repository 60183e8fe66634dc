pub mod angle;
pub mod rotation;
pub mod spherical;

pub use angle::Radian;
pub use rotation::rotation_between;
pub use spherical::SphereVector;
