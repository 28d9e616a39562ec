/// Tolerance for unit-magnitude checks on normalized vectors.
pub const UNIT_TOL: f64 = 1e-9;

/// Tolerance for orthonormality checks on rotation matrices.
pub const ORTHO_TOL: f64 = 1e-9;

/// Tolerance for round-trip point comparisons (model units).
///
/// Detailing coordinates are typically millimeters against site coordinates
/// in the hundreds of kilometers, so round-trips lose a few low bits.
pub const ROUNDTRIP_TOL: f64 = 1e-6;
