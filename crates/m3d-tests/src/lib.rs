//! Integration tests for m3d crates.
//!
//! This crate contains end-to-end tests that check the algebraic laws of
//! the math types over a spread of sample values, agreement with `glam`,
//! and full model/view/projection pipelines through the stream transforms.

use m3d_core::Rotation;
use m3d_math::{Mat4, Vec4};

/// Sample vectors covering zero, axes, negatives and mixed magnitudes.
pub fn sample_vectors() -> Vec<Vec4> {
    vec![
        Vec4::ZERO,
        Vec4::ONE,
        Vec4::X,
        Vec4::Y,
        Vec4::Z,
        Vec4::W,
        Vec4::new(1.0, -2.0, 3.0, 0.5),
        Vec4::new(-0.25, 8.0, 0.125, -4.0),
        Vec4::point(12.0, -1.0, -10.0),
        Vec4::direction(3.0, 4.0, 0.0),
        Vec4::new(1e3, -1e-3, 42.0, 7.0),
    ]
}

/// Sample invertible affine matrices built from the transform builders.
pub fn sample_affine() -> Vec<Mat4> {
    vec![
        Mat4::IDENTITY,
        Mat4::scale(2.0),
        Mat4::scale_xyz(Vec4::new(1.0, -3.0, 0.5, 1.0)),
        Mat4::translate_xyz(Vec4::direction(5.0, -2.0, 7.0)),
        Mat4::rotate_xyz(&Rotation::from_degrees(20.0, 40.0, 0.0)),
        Mat4::rotate_xyz(&Rotation::from_degrees(5.0, 45.0, 10.0)).transposed()
            * Mat4::translate_xyz(Vec4::direction(12.0, -1.0, -10.0))
            * Mat4::scale(1.5),
        Mat4::y_flip() * Mat4::yz_swap(),
    ]
}
