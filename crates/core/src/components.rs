use crate::problems::{Gradient, Hessian};

/// A boxed scalar function of a point, one component of a gradient or Hessian.
pub type ScalarFn<const N: usize> = Box<dyn Fn(&[f64; N]) -> f64>;

/// A gradient given as `N` scalar component functions `∂f/∂xᵢ`.
///
/// The components are evaluated one by one and assembled into a vector at
/// each point.
pub struct GradientComponents<const N: usize>([ScalarFn<N>; N]);

impl<const N: usize> GradientComponents<N> {
    /// Creates a gradient from its components.
    #[must_use]
    pub fn new(components: [ScalarFn<N>; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> Gradient<N> for GradientComponents<N> {
    fn gradient(&self, x: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| (self.0[i])(x))
    }
}

/// A Hessian given as an `N×N` grid of scalar component functions `∂²f/∂xᵢ∂xⱼ`.
///
/// The grid is materialized into a matrix at each point before use.
pub struct HessianComponents<const N: usize>([[ScalarFn<N>; N]; N]);

impl<const N: usize> HessianComponents<N> {
    /// Creates a Hessian from its component grid, indexed `[row][column]`.
    #[must_use]
    pub fn new(components: [[ScalarFn<N>; N]; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> Hessian<N> for HessianComponents<N> {
    fn hessian(&self, x: &[f64; N]) -> [[f64; N]; N] {
        std::array::from_fn(|i| std::array::from_fn(|j| (self.0[i][j])(x)))
    }
}
