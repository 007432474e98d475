//! # m3d-math
//!
//! Vector and matrix math for 3D graphics.
//!
//! - [`Vec4`] - four component vector, used for points (`w = 1`) and
//!   directions (`w = 0`)
//! - [`Mat4`] - 4x4 matrix: scale, translate, rotate, compose, invert
//! - [`Mat4::perspective`], [`Mat4::orthographic`] - projection builders
//! - [`simd`] - one matrix applied to a whole slice of vectors
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! This is the OpenGL convention. [`Mat4::to_cols_array`] yields the
//! column-major layout graphics APIs expect, and conversions to and from
//! [`glam`] are provided for interop.
//!
//! # Usage
//!
//! ```rust
//! use m3d_core::{Degrees, Rotation};
//! use m3d_math::{Mat4, Vec4};
//!
//! let proj = Mat4::perspective(Degrees::new(90.0).into(), 1.5, 0.1, 10000.0)?;
//! let view = Mat4::rotate_xyz(&Rotation::from_degrees(5.0, 45.0, 10.0)).transposed()
//!     * Mat4::translate_xyz(Vec4::direction(12.0, -1.0, -10.0));
//!
//! let ndc = (proj * view).transform_point(Vec4::point(0.0, 0.0, 0.0));
//! assert!(ndc.is_finite());
//! # Ok::<(), m3d_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`m3d-core`] - Scalar, unit types, errors
//! - [`glam`] - Reference math and interop
//! - [`wide`] - Portable SIMD for stream transforms
//! - [`rayon`] - Parallel stream transforms
//!
//! # Used By
//!
//! - `m3d-cli` - Ray tracer and wireframe demos
//! - `m3d-bench` - Stream transform benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
mod projection;
mod vec4;
pub mod simd;

pub use mat4::*;
pub use vec4::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Vec4 as GlamVec4};
}
