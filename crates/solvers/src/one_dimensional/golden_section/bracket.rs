use crate::one_dimensional::ordered;

/// `1/φ = (√5 − 1) / 2`.
const INV_PHI: f64 = 0.618_033_988_749_895;

/// A bracket with two interior points at golden-ratio positions.
///
/// The interior points sit symmetrically, `1/φ` of the width away from the
/// opposite bound. After a shrink the surviving interior point lands exactly
/// on one of the new golden positions, so only the other needs evaluating.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,
    pub(super) inner_left: f64,
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates the bracket, swapping reversed bounds.
    pub(super) fn new(bracket: [f64; 2]) -> Self {
        let (left, right) = ordered(bracket);
        let width = right - left;
        Self {
            left,
            right,
            inner_left: right - INV_PHI * width,
            inner_right: left + INV_PHI * width,
        }
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Drops `(inner_right, right]`; the old `inner_left` becomes `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.right - INV_PHI * self.width();
    }

    /// Drops `[left, inner_left)`; the old `inner_right` becomes `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }
}
