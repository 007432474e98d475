//! Camera projection matrices.
//!
//! Both builders follow the OpenGL clip-space convention: right-handed eye
//! space looking down `-z`, normalized device coordinates in `[-1, 1]` on
//! every axis.
//!
//! Unlike the rest of the library these can fail: a frustum whose planes
//! coincide (or a field of view of zero) has no projection matrix, so the
//! builders return [`Error::DegenerateFrustum`] instead of a matrix full of
//! infinities.
//!
//! # Usage
//!
//! ```rust
//! use m3d_core::Degrees;
//! use m3d_math::{Mat4, Vec4};
//!
//! let proj = Mat4::perspective(Degrees::new(90.0).into(), 1.0, 1.0, 100.0)?;
//! let ndc = proj.transform_point(Vec4::point(0.0, 0.0, -1.0));
//! assert!((ndc.z + 1.0).abs() < 1e-5); // near plane maps to -1
//! # Ok::<(), m3d_core::Error>(())
//! ```

use crate::Mat4;
use m3d_core::scalar::{self, Scalar};
use m3d_core::{Error, Radians, Result};
use std::f32::consts::PI;
use tracing::debug;

impl Mat4 {
    /// Perspective projection.
    ///
    /// # Arguments
    ///
    /// * `fov` - vertical field of view, in `(0, pi)`
    /// * `aspect` - width / height of the view, positive
    /// * `near`, `far` - distances to the clip planes, positive and distinct
    pub fn perspective(fov: Radians, aspect: Scalar, near: Scalar, far: Scalar) -> Result<Self> {
        let fov = fov.value();
        if !(fov > scalar::ZERO && fov < PI) {
            return Err(degenerate(format!("field of view {fov} rad is outside (0, pi)")));
        }
        if !(aspect.is_finite() && aspect > scalar::ZERO) {
            return Err(degenerate(format!("aspect ratio {aspect} must be positive")));
        }
        check_depth(near, far)?;
        if near <= scalar::ZERO || far <= scalar::ZERO {
            return Err(degenerate(format!("near {near} and far {far} must be positive")));
        }

        let inv_tan = scalar::ONE / (fov / scalar::TWO).tan();
        let neg_inv_depth = scalar::ONE / (near - far);

        let mut ret = Self::ZERO;
        ret.m[0][0] = inv_tan / aspect;
        ret.m[1][1] = inv_tan;
        ret.m[2][2] = (far + near) * neg_inv_depth;
        ret.m[2][3] = scalar::TWO * far * near * neg_inv_depth;
        ret.m[3][2] = -scalar::ONE;
        Ok(ret)
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top] x [-near, -far]`.
    ///
    /// Each pair of planes must be distinct. `near` may be negative.
    pub fn orthographic(
        left: Scalar,
        right: Scalar,
        bottom: Scalar,
        top: Scalar,
        near: Scalar,
        far: Scalar,
    ) -> Result<Self> {
        check_planes("left", left, "right", right)?;
        check_planes("bottom", bottom, "top", top)?;
        check_depth(near, far)?;

        let lo = [left, bottom, near];
        let hi = [right, top, far];
        let mut ret = Self::IDENTITY;
        for i in 0..3 {
            let inv = scalar::ONE / (hi[i] - lo[i]);
            ret.m[i][i] = scalar::TWO * inv;
            ret.m[i][3] = -(hi[i] + lo[i]) * inv;
        }
        // eye space looks down -z
        ret.m[2][2] = -ret.m[2][2];
        Ok(ret)
    }
}

fn degenerate(reason: String) -> Error {
    debug!(%reason, "rejecting projection");
    Error::degenerate_frustum(reason)
}

fn check_planes(lo_name: &str, lo: Scalar, hi_name: &str, hi: Scalar) -> Result<()> {
    if !(lo.is_finite() && hi.is_finite()) {
        return Err(degenerate(format!("{lo_name} {lo} and {hi_name} {hi} must be finite")));
    }
    if lo == hi {
        return Err(degenerate(format!("{lo_name} and {hi_name} planes coincide at {lo}")));
    }
    Ok(())
}

#[inline]
fn check_depth(near: Scalar, far: Scalar) -> Result<()> {
    check_planes("near", near, "far", far)
}
