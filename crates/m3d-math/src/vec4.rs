//! 4-component vector type.
//!
//! [`Vec4`] is the only vector type in m3d. Points carry `w = 1`, directions
//! carry `w = 0`, so one type covers both together with homogeneous
//! coordinates coming out of a projection.
//!
//! # Usage
//!
//! ```rust
//! use m3d_math::Vec4;
//!
//! let a = Vec4::new(1.0, 2.0, 3.0, 0.0);
//! let b = Vec4::splat(2.0);
//! let c = (a + b).scaled(0.5);
//! assert_eq!(c, Vec4::new(1.5, 2.0, 2.5, 1.0));
//! ```

use crate::Mat4;
use m3d_core::scalar::{self, Scalar};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

// Component magnitudes whose squares stay normal f32 values.
const SAFE_MIN: Scalar = 1e-18;
const SAFE_MAX: Scalar = 1e18;

/// A four component vector (x, y, z, w).
///
/// Aligned to 16 bytes so slices of `Vec4` load straight into SIMD lanes
/// (see [`crate::simd`]).
///
/// # Example
///
/// ```rust
/// use m3d_math::Vec4;
///
/// let v = Vec4::new(3.0, 4.0, 0.0, 0.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v[0], 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Vec4 {
    /// X component
    pub x: Scalar,
    /// Y component
    pub y: Scalar,
    /// Z component
    pub z: Scalar,
    /// W component (1 for points, 0 for directions)
    pub w: Scalar,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::splat(scalar::ZERO);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::splat(scalar::ONE);

    /// Unit X direction (1, 0, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y direction (0, 1, 0, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z direction (0, 0, 1, 0).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W (0, 0, 0, 1), the origin as a point.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all four components set to `v`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use m3d_math::Vec4;
    ///
    /// assert_eq!(Vec4::splat(0.5), Vec4::new(0.5, 0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: Scalar) -> Self {
        Self::new(v, v, v, v)
    }

    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a point (w = 1).
    #[inline]
    pub const fn point(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::new(x, y, z, scalar::ONE)
    }

    /// Creates a direction (w = 0).
    #[inline]
    pub const fn direction(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::new(x, y, z, scalar::ZERO)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [Scalar; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [Scalar; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Copy with the x component replaced.
    #[inline]
    pub const fn with_x(self, x: Scalar) -> Self {
        Self::new(x, self.y, self.z, self.w)
    }

    /// Copy with the y component replaced.
    #[inline]
    pub const fn with_y(self, y: Scalar) -> Self {
        Self::new(self.x, y, self.z, self.w)
    }

    /// Copy with the z component replaced.
    #[inline]
    pub const fn with_z(self, z: Scalar) -> Self {
        Self::new(self.x, self.y, z, self.w)
    }

    /// Copy with the w component replaced.
    #[inline]
    pub const fn with_w(self, w: Scalar) -> Self {
        Self::new(self.x, self.y, self.z, w)
    }

    /// Component-wise product.
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Multiplies every component by `scale`.
    #[inline]
    pub fn scaled(self, scale: Scalar) -> Self {
        self.multiply(Self::splat(scale))
    }

    /// Sum of all four components.
    #[inline]
    pub fn sum_components(self) -> Scalar {
        self.x + self.y + self.z + self.w
    }

    /// Four component dot product.
    ///
    /// For directions (w = 0) this is the usual 3D dot product.
    #[inline]
    pub fn dot(self, other: Self) -> Scalar {
        self.multiply(other).sum_components()
    }

    /// Cross product of the xyz parts.
    ///
    /// The w components of the inputs are ignored and the result is a
    /// direction (w = 0), orthogonal to both inputs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use m3d_math::Vec4;
    ///
    /// assert_eq!(Vec4::X.cross(Vec4::Y), Vec4::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::direction(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> Scalar {
        self.dot(self)
    }

    /// Length (magnitude) over all four components.
    ///
    /// Stays finite for vectors whose squared length would overflow or
    /// underflow `f32`.
    #[inline]
    pub fn length(self) -> Scalar {
        let (v, k) = self.rescaled();
        k * v.length_squared().sqrt()
    }

    /// `1 / length`.
    ///
    /// Returns `0.0` for a zero-length vector.
    #[inline]
    pub fn reciprocal_length(self) -> Scalar {
        let len = self.length();
        if len > scalar::ZERO {
            scalar::ONE / len
        } else {
            scalar::ZERO
        }
    }

    /// Unit vector in the same direction.
    ///
    /// Returns the zero vector only if every component is zero.
    #[inline]
    pub fn normalized(self) -> Self {
        let (v, _) = self.rescaled();
        v.scaled(v.reciprocal_length())
    }

    /// Largest absolute component.
    #[inline]
    pub fn max_abs_component(self) -> Scalar {
        self.x.abs().max(self.y.abs()).max(self.z.abs()).max(self.w.abs())
    }

    /// Divides by the largest component when squaring would leave the
    /// normal `f32` range. Returns the vector and the factor taken out.
    fn rescaled(self) -> (Self, Scalar) {
        let big = self.max_abs_component();
        if big.is_finite() && big > scalar::ZERO && !(SAFE_MIN..=SAFE_MAX).contains(&big) {
            (self / big, big)
        } else {
            (self, scalar::ONE)
        }
    }

    /// Transforms this vector by `m` (`m * self`).
    #[inline]
    pub fn transformed(self, m: &Mat4) -> Self {
        m.transform(self)
    }

    /// Linear interpolation between self and other.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: Scalar) -> Self {
        self + (other - self) * t
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Returns true if every component differs from `other` by at most `epsilon`.
    #[inline]
    pub fn abs_diff_eq(self, other: Self, epsilon: Scalar) -> bool {
        (0..4).all(|i| scalar::approx_eq(self[i], other[i], epsilon))
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

// Indexing
impl Index<usize> for Vec4 {
    type Output = Scalar;

    #[inline]
    fn index(&self, i: usize) -> &Scalar {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Scalar {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

// Vec4 + Vec4
impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

// Vec4 - Vec4
impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

// -Vec4
impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Vec4 * Vec4 (component-wise)
impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

// Vec4 * f32
impl Mul<Scalar> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        self.scaled(rhs)
    }
}

// f32 * Vec4
impl Mul<Vec4> for Scalar {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs.scaled(self)
    }
}

// Vec4 / f32
impl Div<Scalar> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Scalar) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl From<[Scalar; 4]> for Vec4 {
    #[inline]
    fn from(a: [Scalar; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [Scalar; 4] {
    #[inline]
    fn from(v: Vec4) -> [Scalar; 4] {
        v.to_array()
    }
}

impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> glam::Vec4 {
        v.to_glam()
    }
}
