/// A scalar objective `f: Rᴺ → R`.
///
/// Solvers only assume the function is differentiable and locally convex
/// near the minimum they are looking for.
///
/// Every `Fn(&[f64; N]) -> f64` is an objective.
pub trait Objective<const N: usize> {
    /// Evaluates the objective at `x`.
    fn value(&self, x: &[f64; N]) -> f64;
}

/// The gradient `∇f: Rᴺ → Rᴺ` of an objective.
///
/// Every `Fn(&[f64; N]) -> [f64; N]` is a gradient.
pub trait Gradient<const N: usize> {
    /// Evaluates the gradient at `x`.
    fn gradient(&self, x: &[f64; N]) -> [f64; N];
}

/// The Hessian `H: Rᴺ → Rᴺˣᴺ` of an objective.
///
/// Every `Fn(&[f64; N]) -> [[f64; N]; N]` is a Hessian.
/// Solvers expect the returned matrix to be symmetric and positive definite
/// along every direction they encounter; this is not checked.
pub trait Hessian<const N: usize> {
    /// Evaluates the Hessian matrix at `x`.
    fn hessian(&self, x: &[f64; N]) -> [[f64; N]; N];
}

impl<const N: usize, F> Objective<N> for F
where
    F: Fn(&[f64; N]) -> f64,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self(x)
    }
}

impl<const N: usize, G> Gradient<N> for G
where
    G: Fn(&[f64; N]) -> [f64; N],
{
    fn gradient(&self, x: &[f64; N]) -> [f64; N] {
        self(x)
    }
}

impl<const N: usize, H> Hessian<N> for H
where
    H: Fn(&[f64; N]) -> [[f64; N]; N],
{
    fn hessian(&self, x: &[f64; N]) -> [[f64; N]; N] {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn paraboloid(x: &[f64; 2]) -> f64 {
        x[0].powi(2) + 3.0 * x[1].powi(2)
    }

    #[test]
    fn closures_and_fns_are_capabilities() {
        let grad = |x: &[f64; 2]| [2.0 * x[0], 6.0 * x[1]];
        let hess = |_: &[f64; 2]| [[2.0, 0.0], [0.0, 6.0]];

        let x = [1.0, -2.0];

        assert_relative_eq!(paraboloid.value(&x), 13.0);
        assert_eq!(grad.gradient(&x), [2.0, -12.0]);
        assert_eq!(hess.hessian(&x), [[2.0, 0.0], [0.0, 6.0]]);
    }
}
