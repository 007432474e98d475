//! SIMD-accelerated stream transforms.
//!
//! Applies one [`Mat4`] to a whole slice of [`Vec4`] using the `wide` crate
//! for portable 4-lane SIMD on stable Rust. Each vector is computed as a sum
//! of matrix columns scaled by its components, one `f32x4` per column:
//!
//! ```text
//! out = c0 * x + c1 * y + c2 * z (+ c3)
//! ```
//!
//! # Variants
//!
//! - [`transform_stream`] - inputs are points, w is taken as 1
//! - [`transform_coord_stream`] - points, then divided by the resulting w
//! - [`transform_normal_stream`] - inputs are directions, translation ignored
//! - [`transform_in_place`] - coord transform writing back into the input
//! - [`par_transform_coord_stream`] - rayon-parallel coord transform
//!
//! # Example
//!
//! ```rust
//! use m3d_math::{simd, Mat4, Vec4};
//!
//! let m = Mat4::translate_xyz(Vec4::direction(1.0, 0.0, 0.0));
//! let input = [Vec4::point(0.0, 0.0, 0.0), Vec4::point(1.0, 1.0, 1.0)];
//! let mut output = [Vec4::ZERO; 2];
//! simd::transform_stream(&mut output, &input, &m)?;
//! assert_eq!(output[1], Vec4::point(2.0, 1.0, 1.0));
//! # Ok::<(), m3d_core::Error>(())
//! ```

use crate::{Mat4, Vec4};
use m3d_core::{Error, Result};
use rayon::prelude::*;
use tracing::trace;
use wide::f32x4;

/// Vectors per rayon task in [`par_transform_coord_stream`].
pub const PAR_CHUNK: usize = 4096;

/// Matrix columns loaded into SIMD registers.
#[derive(Clone, Copy)]
struct Columns([f32x4; 4]);

impl Columns {
    #[inline]
    fn load(m: &Mat4) -> Self {
        let c = m.to_cols_2d();
        Self([
            f32x4::from(c[0]),
            f32x4::from(c[1]),
            f32x4::from(c[2]),
            f32x4::from(c[3]),
        ])
    }

    /// `c0*x + c1*y + c2*z`, the linear part only.
    #[inline]
    fn linear(&self, v: &Vec4) -> f32x4 {
        let [c0, c1, c2, _] = self.0;
        c0 * f32x4::splat(v.x) + c1 * f32x4::splat(v.y) + c2 * f32x4::splat(v.z)
    }

    #[inline]
    fn point(&self, v: &Vec4) -> f32x4 {
        self.linear(v) + self.0[3]
    }

    #[inline]
    fn coord(&self, v: &Vec4) -> f32x4 {
        let p = self.point(v);
        let w = p.to_array()[3];
        p / f32x4::splat(w)
    }
}

#[inline]
fn store(v: f32x4) -> Vec4 {
    Vec4::from_array(v.to_array())
}

fn check_lengths(input: usize, output: usize) -> Result<()> {
    if input != output {
        return Err(Error::length_mismatch(input, output));
    }
    Ok(())
}

/// Transforms every input as a point (w taken as 1), without a w divide.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if the slices differ in length.
pub fn transform_stream(output: &mut [Vec4], input: &[Vec4], m: &Mat4) -> Result<()> {
    check_lengths(input.len(), output.len())?;
    trace!(count = input.len(), "transform_stream");
    let cols = Columns::load(m);
    for (o, i) in output.iter_mut().zip(input) {
        *o = store(cols.point(i));
    }
    Ok(())
}

/// Transforms every input as a point and divides by the resulting w.
///
/// This is the usual model-view-projection step: the output xyz are
/// normalized device (or screen) coordinates and w is 1. A point landing on
/// the w = 0 plane produces non-finite components.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if the slices differ in length.
pub fn transform_coord_stream(output: &mut [Vec4], input: &[Vec4], m: &Mat4) -> Result<()> {
    check_lengths(input.len(), output.len())?;
    trace!(count = input.len(), "transform_coord_stream");
    let cols = Columns::load(m);
    for (o, i) in output.iter_mut().zip(input) {
        *o = store(cols.coord(i));
    }
    Ok(())
}

/// Transforms every input as a direction: w taken as 0, so translation is
/// ignored.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if the slices differ in length.
pub fn transform_normal_stream(output: &mut [Vec4], input: &[Vec4], m: &Mat4) -> Result<()> {
    check_lengths(input.len(), output.len())?;
    trace!(count = input.len(), "transform_normal_stream");
    let cols = Columns::load(m);
    for (o, i) in output.iter_mut().zip(input) {
        *o = store(cols.linear(i));
    }
    Ok(())
}

/// Coord transform (see [`transform_coord_stream`]) overwriting `points`.
pub fn transform_in_place(points: &mut [Vec4], m: &Mat4) {
    trace!(count = points.len(), "transform_in_place");
    let cols = Columns::load(m);
    for p in points.iter_mut() {
        *p = store(cols.coord(p));
    }
}

/// Parallel [`transform_coord_stream`] for large slices.
///
/// Work is split into chunks of [`PAR_CHUNK`] vectors on the global rayon
/// pool. Results are identical to the sequential version.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if the slices differ in length.
pub fn par_transform_coord_stream(output: &mut [Vec4], input: &[Vec4], m: &Mat4) -> Result<()> {
    check_lengths(input.len(), output.len())?;
    trace!(count = input.len(), chunk = PAR_CHUNK, "par_transform_coord_stream");
    let cols = Columns::load(m);
    output
        .par_chunks_mut(PAR_CHUNK)
        .zip(input.par_chunks(PAR_CHUNK))
        .for_each(|(out, inp)| {
            for (o, i) in out.iter_mut().zip(inp) {
                *o = store(cols.coord(i));
            }
        });
    Ok(())
}

/// Allocating coord transform of a whole slice.
pub fn transform_points(input: &[Vec4], m: &Mat4) -> Vec<Vec4> {
    let mut output = input.to_vec();
    transform_in_place(&mut output, m);
    output
}
