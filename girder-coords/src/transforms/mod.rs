//! Point conversions between a local coordinate system and the global frame.
//!
//! Both directions are pure arithmetic with no failure path. The rotation
//! matrix is taken on trust; for matrices built by
//! [`LocalAxes`](crate::frames::LocalAxes) the inverse transform is exact
//! (up to rounding) because the transpose of an orthonormal matrix is its
//! inverse.
//!
//! Round-trip contract: for any point `p` and any valid frame,
//! `gcs_to_lcs(lcs_to_gcs(p, o, r), o, r) == p` within
//! [`ROUNDTRIP_TOL`](girder_core::constants::ROUNDTRIP_TOL).

use girder_core::{Point3, RotationMatrix3};

/// Maps a point given in local coordinates to global coordinates.
///
/// Applies the rotation to the local point, then adds the LCS origin
/// (itself expressed in global coordinates).
pub fn lcs_to_gcs(point_lcs: Point3, lcs_origin: Point3, rotation: &RotationMatrix3) -> Point3 {
    rotation * point_lcs + lcs_origin
}

/// Maps a point given in global coordinates to local coordinates.
///
/// Subtracts the LCS origin from the global point, then applies the
/// transpose of the rotation. This inverts [`lcs_to_gcs`] exactly when the
/// rotation is orthonormal.
pub fn gcs_to_lcs(point_gcs: Point3, lcs_origin: Point3, rotation: &RotationMatrix3) -> Point3 {
    rotation.transpose() * (point_gcs - lcs_origin)
}
