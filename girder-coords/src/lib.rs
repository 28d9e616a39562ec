pub mod errors;
pub mod frames;
pub mod transforms;

pub use errors::{CoordError, CoordResult};

pub use frames::{LcsFrame, LocalAxes};

pub use transforms::{gcs_to_lcs, lcs_to_gcs};

pub use girder_core::{Point3, RotationMatrix3, Vector3};
