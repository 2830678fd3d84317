//! This module contains the two Simpson's rule evaluators used by the kernel's
//! measure computations: a closed-form evaluator fed by three tangent magnitudes,
//! and a composite evaluator fed by pre-sampled interior values.

use crate::Result;

/// Evaluates the exact Simpson's rule quadrature of a quadratic interpolant
/// through three tangent magnitudes sampled at the start, midpoint, and end of
/// the interval.
///
/// The interval is not checked for orientation; a reversed interval simply
/// negates the sign of the result, and a zero-width interval yields zero.
///
/// # Arguments
///
/// * `start`: the starting parameter of the interval
/// * `end`: the ending parameter of the interval
/// * `start_tangent`: the integrand's value at `start`
/// * `middle_tangent`: the integrand's value at the interval midpoint
/// * `end_tangent`: the integrand's value at `end`
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use enquad::simpson_tangents;
/// let area = simpson_tangents(0.0, 1.0, 1.0, 1.0, 1.0);
/// assert_eq!(area, 1.0);
/// ```
pub fn simpson_tangents(
    start: f64,
    end: f64,
    start_tangent: f64,
    middle_tangent: f64,
    end_tangent: f64,
) -> f64 {
    ((end - start) / 6.0) * (start_tangent + 4.0 * middle_tangent + end_tangent)
}

/// Evaluates a composite Simpson's rule sum from interior samples split by
/// parity. Every element of `odds` is weighted by 4 and every element of
/// `evens` by 2, then the weighted interior sums are combined with the boundary
/// values as `delta / 3 * (start + odds_sum + evens_sum + end)`.
///
/// The two slices may have any length independently; no relationship between
/// their lengths, `delta`, and the true interval count is enforced. Callers
/// are responsible for supplying samples consistent with a uniform spacing of
/// `delta`, and mismatched inputs silently produce an incorrect but defined
/// value. Use [`simpson_composite_checked`] when the shape should be validated.
///
/// # Arguments
///
/// * `start`: the integrand's value at the first boundary of the composite rule
/// * `end`: the integrand's value at the last boundary of the composite rule
/// * `odds`: the integrand's values at the odd-indexed interior positions
/// * `evens`: the integrand's values at the even-indexed interior positions
/// * `delta`: the uniform spacing between consecutive sample positions
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use enquad::simpson_composite;
/// // Two intervals of width 1.0 over f(x) = 1: boundaries 1, 1 and one odd
/// // interior sample of 1 give the exact area 2.0
/// let area = simpson_composite(1.0, 1.0, &[1.0], &[], 1.0);
/// assert_eq!(area, 2.0);
/// ```
pub fn simpson_composite(start: f64, end: f64, odds: &[f64], evens: &[f64], delta: f64) -> f64 {
    let mut odds_sum = 0.0;
    let mut evens_sum = 0.0;
    for v in odds {
        odds_sum += 4.0 * v;
    }
    for v in evens {
        evens_sum += 2.0 * v;
    }
    (delta / 3.0) * (start + odds_sum + evens_sum + end)
}

/// Validating variant of [`simpson_composite`]. A composite Simpson rule over
/// `2n` uniform intervals has `n` odd-indexed interior samples and `n - 1`
/// even-indexed ones, so this function rejects any slice pair that does not
/// satisfy `odds.len() == evens.len() + 1` (or both empty, the degenerate
/// single-pair case), as well as a step that is not finite and positive.
///
/// # Arguments
///
/// * `start`: the integrand's value at the first boundary of the composite rule
/// * `end`: the integrand's value at the last boundary of the composite rule
/// * `odds`: the integrand's values at the odd-indexed interior positions
/// * `evens`: the integrand's values at the even-indexed interior positions
/// * `delta`: the uniform spacing between consecutive sample positions
///
/// returns: Result<f64, Box<dyn Error, Global>>
pub fn simpson_composite_checked(
    start: f64,
    end: f64,
    odds: &[f64],
    evens: &[f64],
    delta: f64,
) -> Result<f64> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err("Composite Simpson step must be finite and positive".into());
    }
    if !(odds.is_empty() && evens.is_empty()) && odds.len() != evens.len() + 1 {
        return Err(Box::from(format!(
            "Composite Simpson samples have an impossible shape: {} odd-indexed and {} \
            even-indexed values, expected one more odd than even",
            odds.len(),
            evens.len()
        )));
    }
    Ok(simpson_composite(start, end, odds, evens, delta))
}
