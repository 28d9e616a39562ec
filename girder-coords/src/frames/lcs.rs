//! Local coordinate systems for structural members.
//!
//! Each member carries a local coordinate system (LCS): an origin point in
//! the global site frame plus three orthonormal axes. Detailing offsets are
//! expressed in the LCS; setting-out positions in the global frame (GCS).
//! [`LocalAxes`] builds the axis triple from two direction vectors;
//! [`LcsFrame`] bundles it with an origin and converts points both ways.

use crate::errors::{CoordError, CoordResult};
use crate::transforms;
use girder_core::{Point3, RotationMatrix3, Vector3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The orthonormal, right-handed axis triple of a local coordinate system,
/// expressed in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalAxes {
    x: Vector3,
    y: Vector3,
    z: Vector3,
}

impl LocalAxes {
    /// Builds the axis triple from the desired local X and Z directions.
    ///
    /// The inputs need not be unit length. The computation order is fixed:
    /// X and Z are normalized first, then Y completes the frame as
    /// `normalize(z × x)`. The operand order z × x sets the handedness
    /// convention; reversing it would flip the Y axis.
    ///
    /// The inputs are expected to be perpendicular; when they are merely
    /// non-parallel, X and Z are kept as given and only Y is derived.
    ///
    /// Fails with [`CoordError::DegenerateDirection`] if either direction is
    /// the zero vector or the two are parallel (zero cross product).
    ///
    /// ```
    /// use girder_coords::{LocalAxes, Vector3};
    ///
    /// // Horizontal member running north
    /// let axes = LocalAxes::from_directions(Vector3::y_axis(), Vector3::z_axis()).unwrap();
    /// assert_eq!(axes.y(), Vector3::new(-1.0, 0.0, 0.0));
    /// ```
    pub fn from_directions(x_direction: Vector3, z_direction: Vector3) -> CoordResult<Self> {
        let x = x_direction.normalize()?;
        let z = z_direction.normalize()?;
        let y = z
            .cross(&x)
            .normalize()
            .map_err(|_| CoordError::degenerate_direction("x and z directions are parallel"))?;

        Ok(Self { x, y, z })
    }

    /// Reads the axis triple back out of a rotation matrix's columns.
    ///
    /// The columns are taken as-is; the matrix is assumed to carry an
    /// orthonormal LCS→GCS basis such as one built by
    /// [`to_matrix`](Self::to_matrix).
    pub fn from_matrix(rotation: &RotationMatrix3) -> Self {
        Self {
            x: rotation.column(0),
            y: rotation.column(1),
            z: rotation.column(2),
        }
    }

    /// The local X axis in global coordinates.
    pub fn x(&self) -> Vector3 {
        self.x
    }

    /// The local Y axis in global coordinates.
    pub fn y(&self) -> Vector3 {
        self.y
    }

    /// The local Z axis in global coordinates.
    pub fn z(&self) -> Vector3 {
        self.z
    }

    /// Assembles the rotation matrix with columns `[x, y, z]`.
    pub fn to_matrix(&self) -> RotationMatrix3 {
        RotationMatrix3::from_columns(self.x, self.y, self.z)
    }
}

/// One axis per line, in the legacy report order X, Z, Y.
impl fmt::Display for LocalAxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "X axis of lcs:")?;
        writeln!(f, "({},{},{})", self.x.x, self.x.y, self.x.z)?;
        writeln!(f, "Z axis of lcs:")?;
        writeln!(f, "({},{},{})", self.z.x, self.z.y, self.z.z)?;
        writeln!(f, "Y axis of lcs:")?;
        write!(f, "({},{},{})", self.y.x, self.y.y, self.y.z)
    }
}

/// A member's local coordinate system: origin plus rotation.
///
/// Constructed once per member and reused for every point conversion on it.
/// The origin is the LCS origin expressed in global coordinates; the
/// rotation's columns are the local axes in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcsFrame {
    origin: Point3,
    rotation: RotationMatrix3,
}

impl LcsFrame {
    /// Creates a frame from an origin and a ready-made rotation matrix.
    pub fn new(origin: Point3, rotation: RotationMatrix3) -> Self {
        Self { origin, rotation }
    }

    /// Creates a frame at `origin` with axes derived from the desired local
    /// X and Z directions, via [`LocalAxes::from_directions`].
    pub fn from_directions(
        origin: Point3,
        x_direction: Vector3,
        z_direction: Vector3,
    ) -> CoordResult<Self> {
        let axes = LocalAxes::from_directions(x_direction, z_direction)?;
        Ok(Self::new(origin, axes.to_matrix()))
    }

    /// The frame origin in global coordinates.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// The LCS→GCS rotation matrix.
    pub fn rotation(&self) -> &RotationMatrix3 {
        &self.rotation
    }

    /// The axis triple, recovered from the rotation's columns.
    pub fn axes(&self) -> LocalAxes {
        LocalAxes::from_matrix(&self.rotation)
    }

    /// Maps a point given in this frame's local coordinates to global
    /// coordinates.
    pub fn to_global(&self, point_lcs: Point3) -> Point3 {
        transforms::lcs_to_gcs(point_lcs, self.origin, &self.rotation)
    }

    /// Maps a point given in global coordinates into this frame's local
    /// coordinates.
    pub fn to_local(&self, point_gcs: Point3) -> Point3 {
        transforms::gcs_to_lcs(point_gcs, self.origin, &self.rotation)
    }
}

impl fmt::Display for LcsFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LcsFrame(origin=E {:.3}, N {:.3}, U {:.3})",
            self.origin.x, self.origin.y, self.origin.z
        )
    }
}
