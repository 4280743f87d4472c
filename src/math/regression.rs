//! Closed-form ordinary least squares for a straight line
//!
//! Accumulates sums of x, y, xy and x² in a single pass and solves the normal
//! equations directly. Generic over the float type so callers can trade precision
//! for memory; the estimator itself always works in `f64`.

use num_traits::Float;

/// Line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Gradient of the line
    pub slope: T,
    /// Value of the line at `x = 0`
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Evaluate the line at `x`
    pub fn predict(&self, x: T) -> T {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Fit a line through paired points minimizing squared vertical residuals
///
/// Returns `None` when the slices differ in length, hold fewer than two points,
/// or all x values coincide (the normal equations are singular).
pub fn least_squares<T: Float>(xs: &[T], ys: &[T]) -> Option<LinearFit<T>> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let first = *xs.first()?;
    let spread = xs
        .iter()
        .fold(T::zero(), |widest, &x| widest.max((x - first).abs()));
    if spread <= T::epsilon() * first.abs().max(T::one()) {
        return None;
    }

    let n = T::from(xs.len())?;
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_xx = T::zero();

    for (&x, &y) in xs.iter().zip(ys) {
        sum_x = sum_x + x;
        sum_y = sum_y + y;
        sum_xy = x.mul_add(y, sum_xy);
        sum_xx = x.mul_add(x, sum_xx);
    }

    let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
    if denominator <= T::zero() {
        return None;
    }

    let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    Some(LinearFit { slope, intercept })
}

/// Coefficient of determination of a fit over the given points
///
/// A perfect fit (zero residual) reports `1.0`, including the case where every y
/// value is equal.
pub fn r_squared<T: Float>(fit: &LinearFit<T>, xs: &[T], ys: &[T]) -> T {
    let count = T::from(ys.len()).unwrap_or_else(T::one).max(T::one());
    let mean = ys.iter().fold(T::zero(), |acc, &y| acc + y) / count;

    let mut residual = T::zero();
    let mut total = T::zero();
    for (&x, &y) in xs.iter().zip(ys) {
        let error = y - fit.predict(x);
        let spread = y - mean;
        residual = error.mul_add(error, residual);
        total = spread.mul_add(spread, total);
    }

    if total <= T::epsilon() {
        return if residual <= T::epsilon() {
            T::one()
        } else {
            T::zero()
        };
    }

    T::one() - residual / total
}
