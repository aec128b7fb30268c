//! Fixed-size vector and matrix helpers.
//!
//! Points are plain `[f64; N]` arrays and matrices are `[[f64; N]; N]`,
//! indexed `[row][column]`. Every helper returns a new value.

/// Returns the dot product `a · b`.
#[must_use]
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(ai, bi)| ai * bi).sum()
}

/// Returns the Euclidean norm `‖v‖`.
#[must_use]
pub fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    dot(v, v).sqrt()
}

/// Returns `x + alpha * direction`.
#[must_use]
pub fn add_scaled<const N: usize>(x: &[f64; N], alpha: f64, direction: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| x[i] + alpha * direction[i])
}

/// Returns `a - b`.
#[must_use]
pub fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

/// Returns `-v`.
#[must_use]
pub fn neg<const N: usize>(v: &[f64; N]) -> [f64; N] {
    v.map(|vi| -vi)
}

/// Returns the matrix-vector product `m v`.
#[must_use]
pub fn mat_vec<const N: usize>(m: &[[f64; N]; N], v: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| dot(&m[i], v))
}
