//! Affine geometry primitives shared by the camera and the resize engine.

mod matrix;
mod mbr;
mod point;

pub use matrix::Matrix;
pub use mbr::Mbr;
pub use point::Point;
