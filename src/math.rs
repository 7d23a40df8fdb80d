//! Shared numerical primitives anchored on `nalgebra` and `num-complex`.

use nalgebra::Matrix2;
use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Complex scalar used for port parameters and immittances.
pub type C = Complex<Scalar>;
/// Two-by-two complex matrix holding one frequency sample of a two-port.
pub type C2x2 = Matrix2<C>;

/// Complex one.
pub const ONE: C = C::new(1.0, 0.0);

/// Determinant `m00 * m11 - m01 * m10`.
#[inline]
#[must_use]
pub fn determinant_2x2(m: &C2x2) -> C {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

/// Inverts a 2×2 complex matrix via its adjugate.
///
/// A singular input is not rejected: the division by a zero determinant
/// produces infinite or NaN entries, which are passed through to the caller.
#[must_use]
pub fn inverse_2x2(m: &C2x2) -> C2x2 {
    let det = determinant_2x2(m);
    C2x2::new(
        m[(1, 1)] / det,
        -m[(0, 1)] / det,
        -m[(1, 0)] / det,
        m[(0, 0)] / det,
    )
}

/// Scales a 2×2 matrix as `diag(left) * m * diag(right)`.
#[must_use]
pub fn scale_2x2(left: [Scalar; 2], m: &C2x2, right: [Scalar; 2]) -> C2x2 {
    C2x2::new(
        m[(0, 0)] * (left[0] * right[0]),
        m[(0, 1)] * (left[0] * right[1]),
        m[(1, 0)] * (left[1] * right[0]),
        m[(1, 1)] * (left[1] * right[1]),
    )
}
