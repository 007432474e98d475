//! # m3d-core
//!
//! Core types shared by every m3d crate.
//!
//! - [`Scalar`] and the named constants in [`scalar`]
//! - [`Degrees`], [`Radians`] - unit-tagged angles
//! - [`Metres`], [`Feet`] - unit-tagged distances
//! - [`Rotation`] - three Euler angles in degrees
//! - [`Error`], [`Result`] - the shared error type
//!
//! ## Design Philosophy
//!
//! A bare `f32` says nothing about its units. An API taking `fov: f32` could
//! want degrees or radians, and `elevation: f32` could be an altitude or an
//! angle. The newtypes here put the unit in the signature:
//!
//! ```
//! use m3d_core::prelude::*;
//!
//! let fov = Degrees::new(90.0);
//! let rad: Radians = fov.into(); // explicit conversion
//! assert!((rad.value() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! m3d-core (this crate)
//!    ^
//!    |
//!    +-- m3d-math (Vec4, Mat4, stream transforms)
//!    +-- m3d-cli  (demo renderers)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for the unit types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;
pub mod units;

pub use error::*;
pub use scalar::Scalar;
pub use units::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use m3d_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{self, Scalar};
    pub use crate::units::{Degrees, Feet, Metres, Radians, Rotation};
}
