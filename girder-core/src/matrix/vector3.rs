//! 3D Cartesian vectors for detailing calculations.
//!
//! Vectors do double duty in this crate: they carry positions (a point in
//! the global E/N/U site frame, or an offset inside a member's local frame)
//! and free directions (a member's axis, a difference of two points). The
//! representation is identical; only the context differs, which is why
//! [`Point3`](super::Point3) is an alias of [`Vector3`].
//!
//! # Directions and Normalization
//!
//! Frame construction works with unit direction vectors. The
//! [`normalize`](Vector3::normalize) method returns a unit vector pointing
//! the same way, and is the only fallible operation in the crate:
//!
//! ```
//! use girder_core::Vector3;
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! let unit = v.normalize().unwrap();
//! assert!((unit.magnitude() - 1.0).abs() < 1e-15);
//! ```
//!
//! # Dot and Cross Products
//!
//! - **Dot product**: for unit vectors, `a.dot(&b)` is the cosine of the
//!   angle between them. Zero means perpendicular.
//! - **Cross product**: `a.cross(&b)` is perpendicular to both inputs with
//!   direction given by the right-hand rule. Frame construction uses it to
//!   complete a right-handed axis triple from two directions.
//!
//! ```
//! use girder_core::Vector3;
//!
//! let e = Vector3::x_axis();
//! let n = Vector3::y_axis();
//!
//! assert_eq!(e.dot(&n), 0.0);
//! assert_eq!(e.cross(&n), Vector3::z_axis());  // X × Y = Z
//! ```

use crate::{GeomError, GeomResult};
use std::fmt;

/// A 3D Cartesian vector.
///
/// Used throughout the girder crates for global positions (Easting,
/// Northing, Up), local member offsets, and axis directions.
///
/// Components are public for direct access. Values are plain `Copy` data;
/// every operation returns a new vector rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    ///
    /// In site coordinates this is the Easting direction.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    ///
    /// In site coordinates this is the Northing direction.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    ///
    /// In site coordinates this is the Up direction.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Returns the squared magnitude.
    ///
    /// Faster than [`magnitude`](Self::magnitude) when you only need to
    /// compare lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// Fails with [`GeomError::DegenerateVector`] if the magnitude is
    /// exactly `0.0`. There is no tolerance band: a near-zero but nonzero
    /// vector normalizes successfully, matching the behavior detailing
    /// systems rely on when direction vectors come straight from point
    /// differences.
    ///
    /// ```
    /// use girder_core::Vector3;
    ///
    /// let v = Vector3::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.normalize().unwrap(), Vector3::new(0.6, 0.8, 0.0));
    ///
    /// assert!(Vector3::zeros().normalize().is_err());
    /// ```
    pub fn normalize(&self) -> GeomResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(GeomError::degenerate_vector(
                "Vector3::normalize",
                "cannot normalize a zero vector",
            ));
        }
        Ok(Self::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Computes the dot product (inner product) with another vector.
    ///
    /// ```
    /// use girder_core::Vector3;
    ///
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// let b = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(&b), 32.0);  // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    ///
    /// The result is perpendicular to both inputs, with direction given by
    /// the right-hand rule and magnitude `|a||b|sin(θ)`. Parallel inputs
    /// produce the zero vector; that is not an error here, only downstream
    /// if the result is fed to [`normalize`](Self::normalize).
    ///
    /// ```
    /// use girder_core::Vector3;
    ///
    /// let x = Vector3::x_axis();
    /// let y = Vector3::y_axis();
    /// assert_eq!(x.cross(&y), Vector3::z_axis());
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
