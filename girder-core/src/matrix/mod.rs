pub mod rotation_matrix;
pub mod vector3;

pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;

/// A position in space. Same representation as [`Vector3`]; whether a value
/// is a point or a free vector is contextual, not structural.
pub type Point3 = Vector3;
