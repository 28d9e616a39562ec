//! Geometry primitives shared by the girder crates: 3D vectors, rotation
//! matrices, and the error/tolerance vocabulary for detailing calculations.

pub mod constants;
pub mod errors;
pub mod matrix;

pub use errors::{GeomError, GeomResult};
pub use matrix::{Point3, RotationMatrix3, Vector3};
