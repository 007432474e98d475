//! Scalar type and named constants.
//!
//! [`Scalar`] is the element type of every vector and matrix in m3d.
//! It is an alias so the whole library reads in terms of one name.

/// The scalar element type.
pub type Scalar = f32;

/// `0.0`
pub const ZERO: Scalar = 0.0;

/// `1.0`
pub const ONE: Scalar = 1.0;

/// `2.0`
pub const TWO: Scalar = 2.0;

/// Returns `true` if `a` and `b` differ by at most `epsilon`.
#[inline]
pub fn approx_eq(a: Scalar, b: Scalar, epsilon: Scalar) -> bool {
    (a - b).abs() <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(ZERO, 0.0);
        assert_eq!(ONE, 1.0);
        assert_eq!(TWO, ONE + ONE);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-7, 1e-6));
        assert!(!approx_eq(1.0, 1.1, 1e-6));
    }
}
