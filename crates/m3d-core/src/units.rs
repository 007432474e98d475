//! Unit-tagged scalars for angles and distances.
//!
//! Each type wraps a single [`Scalar`] and records its unit in the type.
//! Conversion between units is always explicit, either through the named
//! method ([`Degrees::to_radians`]) or a `From` conversion. Nothing converts
//! silently.
//!
//! # Usage
//!
//! ```
//! use m3d_core::{Degrees, Feet, Metres, Radians};
//!
//! let quarter = Degrees::new(90.0).to_radians();
//! assert!((quarter.value() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
//!
//! let height: Feet = Metres::new(10.0).into();
//! assert!((height.value() - 32.808_4).abs() < 1e-3);
//! ```
//!
//! Values of the same unit support `+`, `-`, unary `-`, and scaling by a
//! plain scalar. Mixing units does not compile:
//!
//! ```compile_fail
//! use m3d_core::{Degrees, Radians};
//! let _ = Degrees::new(1.0) + Radians::new(1.0);
//! ```

use crate::scalar::{self, Scalar};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Degrees to radians factor (pi / 180).
pub const DEG_TO_RAD: Scalar = std::f32::consts::PI / 180.0;

/// Radians to degrees factor (180 / pi).
pub const RAD_TO_DEG: Scalar = 180.0 / std::f32::consts::PI;

/// Metres to international feet.
pub const METRES_TO_FEET: Scalar = 3.280_839_9;

/// International feet to metres (exact by definition).
pub const FEET_TO_METRES: Scalar = 0.3048;

// Shared surface of every unit newtype: construction, raw access,
// same-unit arithmetic and a suffixed Display.
macro_rules! unit_type {
    ($name:ident, $suffix:literal) => {
        impl $name {
            /// Zero in this unit.
            pub const ZERO: Self = Self(scalar::ZERO);

            /// Wraps a raw value that is already in this unit.
            #[inline]
            pub const fn new(value: Scalar) -> Self {
                Self(value)
            }

            /// Returns the raw value in this unit.
            #[inline]
            pub const fn value(self) -> Scalar {
                self.0
            }

            /// Returns `true` if the value is neither NaN nor infinite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl Mul<Scalar> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Scalar) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<Scalar> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Scalar) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if let Some(precision) = f.precision() {
                    write!(f, "{:.*}{}", precision, self.0, $suffix)
                } else {
                    write!(f, "{}{}", self.0, $suffix)
                }
            }
        }
    };
}

// ============================================================================
// Angles
// ============================================================================

/// An angle in degrees. A full circle is 360 degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Degrees(pub Scalar);

/// An angle in radians. A full circle is two pi radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Radians(pub Scalar);

unit_type!(Degrees, "°");
unit_type!(Radians, " rad");

impl Degrees {
    /// Converts to radians.
    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0 * DEG_TO_RAD)
    }
}

impl Radians {
    /// Converts to degrees.
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * RAD_TO_DEG)
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> Scalar {
        self.0.sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> Scalar {
        self.0.cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> Scalar {
        self.0.tan()
    }

    /// Sine and cosine in one call.
    #[inline]
    pub fn sin_cos(self) -> (Scalar, Scalar) {
        self.0.sin_cos()
    }
}

impl From<Degrees> for Radians {
    #[inline]
    fn from(d: Degrees) -> Self {
        d.to_radians()
    }
}

impl From<Radians> for Degrees {
    #[inline]
    fn from(r: Radians) -> Self {
        r.to_degrees()
    }
}

// ============================================================================
// Distances
// ============================================================================

/// A distance in SI metres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Metres(pub Scalar);

/// A distance in international feet (0.3048 m).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Feet(pub Scalar);

unit_type!(Metres, " m");
unit_type!(Feet, " ft");

impl Metres {
    /// Converts to feet.
    #[inline]
    pub fn to_feet(self) -> Feet {
        Feet(self.0 * METRES_TO_FEET)
    }
}

impl Feet {
    /// Converts to metres.
    #[inline]
    pub fn to_metres(self) -> Metres {
        Metres(self.0 * FEET_TO_METRES)
    }
}

impl From<Metres> for Feet {
    #[inline]
    fn from(m: Metres) -> Self {
        m.to_feet()
    }
}

impl From<Feet> for Metres {
    #[inline]
    fn from(f: Feet) -> Self {
        f.to_metres()
    }
}

// ============================================================================
// Rotation
// ============================================================================

/// A set of rotations about the x, y and z axes.
///
/// Matrix builders apply these as `Rx * Ry * Rz`, so a column vector is
/// rotated about z first, then y, then x.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    /// Rotation about the x axis
    pub x: Degrees,
    /// Rotation about the y axis
    pub y: Degrees,
    /// Rotation about the z axis
    pub z: Degrees,
}

impl Rotation {
    /// No rotation.
    pub const ZERO: Self = Self {
        x: Degrees::ZERO,
        y: Degrees::ZERO,
        z: Degrees::ZERO,
    };

    /// Creates a rotation from three angles in degrees.
    #[inline]
    pub const fn new(x: Degrees, y: Degrees, z: Degrees) -> Self {
        Self { x, y, z }
    }

    /// Creates a rotation from raw degree values.
    #[inline]
    pub const fn from_degrees(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::new(Degrees(x), Degrees(y), Degrees(z))
    }
}
