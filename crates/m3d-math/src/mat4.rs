//! 4x4 matrix type for 3D transformations.
//!
//! [`Mat4`] covers model, view and projection transforms: scaling,
//! translation, rotation about the principal axes, composition, inversion
//! and the [`Mat4::perspective`] / [`Mat4::orthographic`] projection builders.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 m03 |   | x |
//! | m10 m11 m12 m13 | * | y |
//! | m20 m21 m22 m23 |   | z |
//! | m30 m31 m32 m33 |   | w |
//! ```
//!
//! Translation lives in the last column. In a product `a * b` the right
//! hand matrix is applied first, so `translate * rotate * scale` scales,
//! then rotates, then translates. Coordinates are right-handed and
//! positive angles rotate counter-clockwise looking down the axis.
//!
//! # Usage
//!
//! ```rust
//! use m3d_core::Degrees;
//! use m3d_math::{Mat4, Vec4};
//!
//! let model = Mat4::translate_xyz(Vec4::direction(0.0, 0.0, -10.0))
//!     * Mat4::rotate_y(Degrees::new(90.0).into())
//!     * Mat4::scale(2.0);
//!
//! let p = model * Vec4::point(1.0, 0.0, 0.0);
//! assert!(p.abs_diff_eq(Vec4::point(0.0, 0.0, -12.0), 1e-5));
//! ```

use crate::Vec4;
use m3d_core::scalar::{self, Scalar};
use m3d_core::{Error, Radians, Rotation};
use std::ops::{Index, IndexMut, Mul};

/// Principal axis selector for [`Mat4::rotate_common`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (index 0)
    X,
    /// The y axis (index 1)
    Y,
    /// The z axis (index 2)
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Row/column index of this axis.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The other two axes in cyclic order (x -> y -> z -> x).
    #[inline]
    const fn others(self) -> (usize, usize) {
        match self {
            Axis::X => (1, 2),
            Axis::Y => (2, 0),
            Axis::Z => (0, 1),
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(Error::invalid_axis(index)),
        }
    }
}

/// A 4x4 matrix for 3D transformations.
///
/// Stored in row-major order. Use [`Mat4::from_rows`] or
/// [`Mat4::from_cols_array`] to construct from component arrays.
///
/// # Example
///
/// ```rust
/// use m3d_math::{Mat4, Vec4};
///
/// let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!(Mat4::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[Scalar; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self {
        m: [[scalar::ZERO; 4]; 4],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(scalar::ONE, scalar::ONE, scalar::ONE, scalar::ONE);

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[Scalar; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from 16 values in row-major order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use m3d_math::Mat4;
    ///
    /// let m = Mat4::from_rows_array(&[
    ///     1.0, 0.0, 0.0, 5.0,
    ///     0.0, 1.0, 0.0, 6.0,
    ///     0.0, 0.0, 1.0, 7.0,
    ///     0.0, 0.0, 0.0, 1.0,
    /// ]);
    /// assert_eq!(m.col(3).to_array(), [5.0, 6.0, 7.0, 1.0]);
    /// ```
    #[inline]
    pub fn from_rows_array(v: &[Scalar; 16]) -> Self {
        let mut ret = Self::ZERO;
        for (i, value) in v.iter().enumerate() {
            ret.m[i / 4][i % 4] = *value;
        }
        ret
    }

    /// Creates a matrix from 16 values in column-major order
    /// (the OpenGL memory layout).
    #[inline]
    pub fn from_cols_array(v: &[Scalar; 16]) -> Self {
        let mut ret = Self::ZERO;
        for (i, value) in v.iter().enumerate() {
            ret.m[i % 4][i / 4] = *value;
        }
        ret
    }

    /// Returns the 16 values in column-major order, ready for a GPU
    /// uniform expecting the OpenGL layout.
    #[inline]
    pub fn to_cols_array(&self) -> [Scalar; 16] {
        let mut ret = [scalar::ZERO; 16];
        for (i, value) in ret.iter_mut().enumerate() {
            *value = self.m[i % 4][i / 4];
        }
        ret
    }

    /// Returns the columns as arrays.
    #[inline]
    pub fn to_cols_2d(&self) -> [[Scalar; 4]; 4] {
        self.transposed().m
    }

    /// Creates a matrix from Vec4 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: Scalar, d1: Scalar, d2: Scalar, d3: Scalar) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0, 0.0],
            [0.0, d1, 0.0, 0.0],
            [0.0, 0.0, d2, 0.0],
            [0.0, 0.0, 0.0, d3],
        ])
    }

    /// Uniform 3D scale. The w row is left as identity.
    #[inline]
    pub const fn scale(s: Scalar) -> Self {
        Self::diagonal(s, s, s, scalar::ONE)
    }

    /// Non-uniform scale by the four components of `scale`.
    ///
    /// Note that `scale.w` lands in `m33`; pass `w = 1` for an affine scale.
    #[inline]
    pub const fn scale_xyz(scale: Vec4) -> Self {
        Self::diagonal(scale.x, scale.y, scale.z, scale.w)
    }

    /// Translation by the xyz part of `offset` (w is ignored).
    #[inline]
    pub const fn translate_xyz(offset: Vec4) -> Self {
        let mut ret = Self::IDENTITY;
        ret.m[0][3] = offset.x;
        ret.m[1][3] = offset.y;
        ret.m[2][3] = offset.z;
        ret
    }

    /// Negates y, flipping the handedness of the coordinate system.
    #[inline]
    pub const fn y_flip() -> Self {
        Self::diagonal(scalar::ONE, -scalar::ONE, scalar::ONE, scalar::ONE)
    }

    /// Swaps y and z, e.g. to move between a z-up world and a y-up view.
    #[inline]
    pub const fn yz_swap() -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation of `angle` about one principal axis.
    ///
    /// Shared by [`rotate_x`](Self::rotate_x), [`rotate_y`](Self::rotate_y)
    /// and [`rotate_z`](Self::rotate_z).
    pub fn rotate_common(angle: Radians, axis: Axis) -> Self {
        let (s, c) = angle.sin_cos();
        let (i, j) = axis.others();
        let mut ret = Self::IDENTITY;
        ret.m[i][i] = c;
        ret.m[j][j] = c;
        ret.m[i][j] = -s;
        ret.m[j][i] = s;
        ret
    }

    /// Rotation about the x axis.
    #[inline]
    pub fn rotate_x(angle: Radians) -> Self {
        Self::rotate_common(angle, Axis::X)
    }

    /// Rotation about the y axis.
    #[inline]
    pub fn rotate_y(angle: Radians) -> Self {
        Self::rotate_common(angle, Axis::Y)
    }

    /// Rotation about the z axis.
    #[inline]
    pub fn rotate_z(angle: Radians) -> Self {
        Self::rotate_common(angle, Axis::Z)
    }

    /// Combined rotation `Rx * Ry * Rz`.
    pub fn rotate_xyz(rotation: &Rotation) -> Self {
        Self::rotate_x(rotation.x.into())
            * Self::rotate_y(rotation.y.into())
            * Self::rotate_z(rotation.z.into())
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let mut ret = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                ret.m[i][j] = self.m[j][i];
            }
        }
        ret
    }

    /// Multiplies every element by `s`.
    ///
    /// For a geometric scale see [`Mat4::scale`] and [`Mat4::scale_xyz`].
    #[inline]
    pub fn scaled(&self, s: Scalar) -> Self {
        let mut ret = *self;
        ret.m.iter_mut().flatten().for_each(|v| *v *= s);
        ret
    }

    /// Determinant of the 3x3 sub-matrix picked by `rows` and `cols`.
    #[inline]
    fn minor3(&self, rows: [usize; 3], cols: [usize; 3]) -> Scalar {
        let m = &self.m;
        let [r0, r1, r2] = rows;
        let [c0, c1, c2] = cols;
        m[r0][c0] * (m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1])
            - m[r0][c1] * (m[r1][c0] * m[r2][c2] - m[r1][c2] * m[r2][c0])
            + m[r0][c2] * (m[r1][c0] * m[r2][c1] - m[r1][c1] * m[r2][c0])
    }

    /// Signed cofactor of element (row, col).
    #[inline]
    fn cofactor(&self, row: usize, col: usize) -> Scalar {
        const EXCLUDING: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];
        let minor = self.minor3(EXCLUDING[row], EXCLUDING[col]);
        if (row + col) % 2 == 0 { minor } else { -minor }
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// A zero determinant means the matrix has no inverse.
    pub fn determinant(&self) -> Scalar {
        (0..4).map(|j| self.m[0][j] * self.cofactor(0, j)).sum()
    }

    /// Transpose of the cofactor matrix.
    ///
    /// `a * a.adjugate() == a.determinant() * IDENTITY`.
    pub fn adjugate(&self) -> Self {
        let mut ret = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                ret.m[i][j] = self.cofactor(j, i);
            }
        }
        ret
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the determinant is exactly zero or the result
    /// would not be finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use m3d_math::Mat4;
    ///
    /// let m = Mat4::scale(2.0);
    /// let inv = m.inverse().unwrap();
    /// assert!((m * inv).abs_diff_eq(&Mat4::IDENTITY, 1e-6));
    /// assert!(Mat4::ZERO.inverse().is_none());
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == scalar::ZERO || !det.is_finite() {
            return None;
        }
        let inv_det = scalar::ONE / det;
        if !inv_det.is_finite() {
            return None;
        }
        Some(self.adjugate().scaled(inv_det))
    }

    /// Inverse of this matrix, or [`Mat4::ZERO`] if it is singular.
    ///
    /// Use [`inverse`](Self::inverse) to tell the two cases apart.
    #[inline]
    pub fn inversed(&self) -> Self {
        self.inverse().unwrap_or(Self::ZERO)
    }

    /// Transforms a Vec4 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Transforms `p` as a point (w forced to 1) and divides by the
    /// resulting w.
    ///
    /// Points that land on the w = 0 plane come back with non-finite
    /// components.
    #[inline]
    pub fn transform_point(&self, p: Vec4) -> Vec4 {
        let h = self.transform(p.with_w(scalar::ONE));
        h / h.w
    }

    /// Transforms `d` as a direction (w forced to 0, translation ignored).
    #[inline]
    pub fn transform_direction(&self, d: Vec4) -> Vec4 {
        self.transform(d.with_w(scalar::ZERO))
    }

    /// Multiplies two matrices.
    ///
    /// Order matters: the result applies `other` first, then `self`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Returns true if every element differs from `other` by at most `epsilon`.
    #[inline]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| scalar::approx_eq(*a, *b, epsilon))
    }

    /// Converts to glam Mat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&self.to_cols_2d())
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array(&m.to_cols_array())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat4 * f32
impl Mul<Scalar> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        self.scaled(rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = [Scalar; 4];

    #[inline]
    fn index(&self, i: usize) -> &[Scalar; 4] {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [Scalar; 4] {
        &mut self.m[i]
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use m3d_core::Degrees;

    const EPSILON: f32 = 1e-5;

    fn sample() -> Mat4 {
        Mat4::from_rows([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 3.0, 0.0, -1.0],
            [0.0, 1.0, 4.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_mat4_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Mat4::IDENTITY * v, v);
        assert_eq!(sample() * Mat4::IDENTITY, sample());
        assert_eq!(Mat4::IDENTITY * sample(), sample());
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_mat4_row_col_arrays() {
        let rows: [f32; 16] = std::array::from_fn(|i| i as f32);
        let m = Mat4::from_rows_array(&rows);
        assert_eq!(m.m[1][2], 6.0);
        assert_eq!(Mat4::from_cols_array(&m.to_cols_array()), m);
        assert_eq!(Mat4::from_cols_array(&rows), m.transposed());
    }

    #[test]
    fn test_mat4_transpose() {
        let m = sample();
        let t = m.transposed();
        assert_eq!(t.m[0][3], m.m[3][0]);
        assert_eq!(t.m[3][0], 3.0);
        assert_eq!(t.transposed(), m);
    }

    #[test]
    fn test_mat4_translate() {
        let t = Mat4::translate_xyz(Vec4::new(1.0, 2.0, 3.0, 99.0));
        assert_eq!(t * Vec4::point(1.0, 1.0, 1.0), Vec4::point(2.0, 3.0, 4.0));
        // directions are unaffected
        assert_eq!(t * Vec4::X, Vec4::X);
        assert_eq!(t.m[3][3], 1.0);
    }

    #[test]
    fn test_mat4_scale() {
        let v = Vec4::point(1.0, 2.0, 3.0);
        assert_eq!(Mat4::scale(2.0) * v, Vec4::point(2.0, 4.0, 6.0));
        let s = Mat4::scale_xyz(Vec4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(s * v, Vec4::point(2.0, 6.0, 12.0));
        assert_eq!(Mat4::scale(2.0) * Mat4::scale(3.0), Mat4::scale(6.0));
    }

    #[test]
    fn test_mat4_scaled_elementwise() {
        let m = sample().scaled(2.0);
        assert_eq!(m.m[0][3], 6.0);
        assert_eq!(m.m[3][3], 2.0);
        assert_eq!(sample() * 1.0, sample());
    }

    #[test]
    fn test_mat4_rotations() {
        let quarter: Radians = Degrees::new(90.0).into();
        let rx = Mat4::rotate_x(quarter) * Vec4::Y;
        let ry = Mat4::rotate_y(quarter) * Vec4::Z;
        let rz = Mat4::rotate_z(quarter) * Vec4::X;
        assert!(rx.abs_diff_eq(Vec4::Z, EPSILON));
        assert!(ry.abs_diff_eq(Vec4::X, EPSILON));
        assert!(rz.abs_diff_eq(Vec4::Y, EPSILON));
    }

    #[test]
    fn test_mat4_rotation_is_orthonormal() {
        let r = Mat4::rotate_xyz(&Rotation::from_degrees(20.0, 40.0, 75.0));
        assert!((r * r.transposed()).abs_diff_eq(&Mat4::IDENTITY, EPSILON));
        assert_abs_diff_eq!(r.determinant(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_mat4_rotate_xyz_order() {
        let rot = Rotation::from_degrees(10.0, 20.0, 30.0);
        let expected = Mat4::rotate_x(rot.x.into())
            * Mat4::rotate_y(rot.y.into())
            * Mat4::rotate_z(rot.z.into());
        assert_eq!(Mat4::rotate_xyz(&rot), expected);
    }

    #[test]
    fn test_mat4_axis_try_from() {
        assert_eq!(Axis::try_from(1usize).unwrap(), Axis::Y);
        assert_eq!(Axis::try_from(3usize), Err(Error::invalid_axis(3)));
        for axis in Axis::ALL {
            assert_eq!(Axis::try_from(axis.index()).unwrap(), axis);
        }
    }

    #[test]
    fn test_mat4_flip_and_swap() {
        let p = Vec4::point(1.0, 2.0, 3.0);
        assert_eq!(Mat4::y_flip() * p, Vec4::point(1.0, -2.0, 3.0));
        assert_eq!(Mat4::yz_swap() * p, Vec4::point(1.0, 3.0, 2.0));
        assert_eq!(Mat4::yz_swap() * Mat4::yz_swap(), Mat4::IDENTITY);
    }

    #[test]
    fn test_mat4_determinant() {
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4::scale(2.0).determinant(), 8.0);
        // upper 3x3 of sample(): 2*(12-0) - 0 + 1*(1-0) = 25
        assert_abs_diff_eq!(sample().determinant(), 25.0, epsilon = EPSILON);
    }

    #[test]
    fn test_mat4_adjugate() {
        let m = sample();
        let det = m.determinant();
        let prod = m * m.adjugate();
        assert!(prod.abs_diff_eq(&Mat4::IDENTITY.scaled(det), 1e-4));
    }

    #[test]
    fn test_mat4_inverse() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!((m * inv).abs_diff_eq(&Mat4::IDENTITY, EPSILON));
        assert!((inv * m).abs_diff_eq(&Mat4::IDENTITY, EPSILON));
    }

    #[test]
    fn test_mat4_inverse_identity() {
        let inv = Mat4::IDENTITY.inversed();
        let invinv = inv.inversed();
        assert!(inv.abs_diff_eq(&Mat4::IDENTITY, EPSILON));
        assert!(invinv.abs_diff_eq(&Mat4::IDENTITY, EPSILON));
    }

    #[test]
    fn test_mat4_singular() {
        let m = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0], // Row 2 = 2 * Row 1
            [1.0, 1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert!(m.inverse().is_none());
        assert_eq!(m.inversed(), Mat4::ZERO);
    }

    #[test]
    fn test_mat4_inverse_small_determinant() {
        // 10 000 unit box: det is about -8e-12 but the matrix is well conditioned
        let o = Mat4::orthographic(-5000.0, 5000.0, -5000.0, 5000.0, 0.0, 10000.0).unwrap();
        let inv = o.inverse().unwrap();
        assert!((o * inv).abs_diff_eq(&Mat4::IDENTITY, EPSILON));
        assert!((o * o.inversed()).abs_diff_eq(&Mat4::IDENTITY, EPSILON));

        let s = Mat4::scale(1e-4);
        let inv = s.inverse().unwrap();
        assert!((s * inv).abs_diff_eq(&Mat4::IDENTITY, EPSILON));
        assert_abs_diff_eq!(inv.m[0][0], 1e4, epsilon = 1.0);
        assert_abs_diff_eq!(inv.m[3][3], 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_mat4_mul_order() {
        let t = Mat4::translate_xyz(Vec4::direction(5.0, 0.0, 0.0));
        let s = Mat4::scale(2.0);
        let p = Vec4::point(1.0, 0.0, 0.0);
        // scale first, then translate
        assert_eq!((t * s) * p, Vec4::point(7.0, 0.0, 0.0));
        assert_eq!((s * t) * p, Vec4::point(12.0, 0.0, 0.0));
        assert_eq!((t * s) * p, t * (s * p));
    }

    #[test]
    fn test_mat4_transform_point_and_direction() {
        let m = Mat4::translate_xyz(Vec4::direction(1.0, 2.0, 3.0)) * Mat4::scale(2.0);
        assert_eq!(
            m.transform_point(Vec4::direction(1.0, 1.0, 1.0)),
            Vec4::point(3.0, 4.0, 5.0)
        );
        assert_eq!(
            m.transform_direction(Vec4::point(1.0, 1.0, 1.0)),
            Vec4::direction(2.0, 2.0, 2.0)
        );
    }

    #[test]
    fn test_mat4_glam_roundtrip() {
        let m = sample();
        let g = m.to_glam();
        assert_eq!(Mat4::from_glam(g), m);
        let v = Vec4::new(1.0, -1.0, 2.0, 1.0);
        assert!(Vec4::from_glam(g * v.to_glam()).abs_diff_eq(m * v, EPSILON));
    }

    #[test]
    fn test_mat4_rotation_matches_glam() {
        let angle = Degrees::new(33.0).to_radians();
        let pairs = [
            (Mat4::rotate_x(angle), glam::Mat4::from_rotation_x(angle.value())),
            (Mat4::rotate_y(angle), glam::Mat4::from_rotation_y(angle.value())),
            (Mat4::rotate_z(angle), glam::Mat4::from_rotation_z(angle.value())),
        ];
        for (ours, theirs) in pairs {
            assert!(ours.abs_diff_eq(&Mat4::from_glam(theirs), EPSILON));
        }
    }
}
