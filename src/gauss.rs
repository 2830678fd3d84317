//! This module contains a fixed-order 24-point Gauss-Legendre rule on the
//! interval [-1, 1], exposed as constant abscissa/weight tables plus helpers
//! that map the rule onto an arbitrary interval.
//!
//! The rule is exact for polynomials up to degree 47, which makes it a good
//! one-shot evaluator for the smooth tangent-magnitude integrands produced by
//! spline curves. There is no subdivision or error estimate; callers that need
//! those belong with a composite rule instead.

use itertools::izip;

/// The abscissae of a 24-point Gauss-Legendre rule on [-1, 1], pairwise-indexed
/// with [`GAUSS_LEGENDRE_WEIGHTS`]. The nodes are symmetric about zero and
/// ordered as (-x0, x0, -x1, x1, ...) with magnitudes increasing.
pub const GAUSS_LEGENDRE_ABSCISSAE: [f64; 24] = [
    -0.0640568928626056260850430826247450385909,
    0.0640568928626056260850430826247450385909,
    -0.1911188674736163091586398207570696318404,
    0.1911188674736163091586398207570696318404,
    -0.3150426796961633743867932913198102407864,
    0.3150426796961633743867932913198102407864,
    -0.4337935076260451384870842319133497124524,
    0.4337935076260451384870842319133497124524,
    -0.5454214713888395356583756172183723700107,
    0.5454214713888395356583756172183723700107,
    -0.6480936519369755692524957869107476266696,
    0.6480936519369755692524957869107476266696,
    -0.7401241915785543642438281030999784255232,
    0.7401241915785543642438281030999784255232,
    -0.8200019859739029219539498726697452080761,
    0.8200019859739029219539498726697452080761,
    -0.8864155270044010342131543419821967550873,
    0.8864155270044010342131543419821967550873,
    -0.9382745520027327585236490017087214496548,
    0.9382745520027327585236490017087214496548,
    -0.9747285559713094981983919930081690617411,
    0.9747285559713094981983919930081690617411,
    -0.9951872199970213601799974097007368118745,
    0.9951872199970213601799974097007368118745,
];

/// The weights of a 24-point Gauss-Legendre rule on [-1, 1], pairwise-indexed
/// with [`GAUSS_LEGENDRE_ABSCISSAE`]. Symmetric nodes share a weight, and the
/// weights sum to 2, the measure of the reference interval.
pub const GAUSS_LEGENDRE_WEIGHTS: [f64; 24] = [
    0.1279381953467521569740561652246953718517,
    0.1279381953467521569740561652246953718517,
    0.1258374563468282961213753825111836887264,
    0.1258374563468282961213753825111836887264,
    0.121670472927803391204463153476262425607,
    0.121670472927803391204463153476262425607,
    0.1155056680537256013533444839067835598622,
    0.1155056680537256013533444839067835598622,
    0.1074442701159656347825773424466062227946,
    0.1074442701159656347825773424466062227946,
    0.0976186521041138882698806644642471544279,
    0.0976186521041138882698806644642471544279,
    0.086190161531953275917185202983742667185,
    0.086190161531953275917185202983742667185,
    0.0733464814110803057340336152531165181193,
    0.0733464814110803057340336152531165181193,
    0.0592985849154367807463677585001085845412,
    0.0592985849154367807463677585001085845412,
    0.0442774388174198061686027482113382288593,
    0.0442774388174198061686027482113382288593,
    0.0285313886289336631813078159518782864491,
    0.0285313886289336631813078159518782864491,
    0.0123412297999871995468056670700372915759,
    0.0123412297999871995468056670700372915759,
];

/// Returns an iterator of (abscissa, weight) pairs with the rule mapped from
/// the reference interval [-1, 1] onto [a, b] by the standard affine transform.
/// Each yielded abscissa is a sample position in [a, b] and each weight is
/// already scaled by the interval half-width, so the integral estimate is just
/// the sum of `weight * f(abscissa)` over the pairs.
///
/// # Arguments
///
/// * `a`: the starting value of the integration interval
/// * `b`: the ending value of the integration interval
///
/// returns: impl Iterator<Item = (f64, f64)>
///
/// # Examples
///
/// ```
/// use enquad::gauss_legendre_nodes;
/// use approx::assert_relative_eq;
/// let total: f64 = gauss_legendre_nodes(2.0, 5.0).map(|(_, w)| w).sum();
/// assert_relative_eq!(total, 3.0, epsilon = 1.0e-12);
/// ```
pub fn gauss_legendre_nodes(a: f64, b: f64) -> impl Iterator<Item = (f64, f64)> {
    let scale = (b - a) * 0.5;
    let shift = (a + b) * 0.5;
    izip!(GAUSS_LEGENDRE_ABSCISSAE, GAUSS_LEGENDRE_WEIGHTS)
        .map(move |(x, w)| (scale * x + shift, scale * w))
}

/// Approximates the definite integral of `f` over [a, b] with the 24-point
/// Gauss-Legendre rule. The result is exact (to rounding) for polynomial
/// integrands up to degree 47 and converges rapidly for smooth integrands;
/// reversing the interval negates the sign.
///
/// # Arguments
///
/// * `f`: the integrand
/// * `a`: the starting value of the integration interval
/// * `b`: the ending value of the integration interval
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use enquad::gauss_legendre;
/// use approx::assert_relative_eq;
/// let area = gauss_legendre(|x| x * x, 0.0, 3.0);
/// assert_relative_eq!(area, 9.0, epsilon = 1.0e-12);
/// ```
pub fn gauss_legendre(f: impl Fn(f64) -> f64, a: f64, b: f64) -> f64 {
    gauss_legendre_nodes(a, b).map(|(x, w)| w * f(x)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;

    #[test]
    fn weights_sum_to_interval_measure() {
        let total: f64 = GAUSS_LEGENDRE_WEIGHTS.iter().sum();
        assert_relative_eq!(total, 2.0, epsilon = 1.0e-12);
    }

    #[test]
    fn nodes_are_symmetric_with_matched_weights() {
        for (i, (&x, &w)) in izip!(&GAUSS_LEGENDRE_ABSCISSAE, &GAUSS_LEGENDRE_WEIGHTS).enumerate() {
            let mirrored = izip!(&GAUSS_LEGENDRE_ABSCISSAE, &GAUSS_LEGENDRE_WEIGHTS)
                .any(|(&x2, &w2)| x2 == -x && w2 == w);
            assert!(mirrored, "No mirror for node {} at {} (weight {})", i, x, w);
        }
    }

    #[test]
    fn nodes_lie_inside_reference_interval() {
        for &x in &GAUSS_LEGENDRE_ABSCISSAE {
            assert!(x.abs() < 1.0);
        }
    }

    #[test]
    fn exact_for_low_degree_polynomial() {
        // Integral of x^3 + x^2 + x + 1 over [-3, 4]
        let f = |x: f64| x * x * x + x * x + x + 1.0;
        let anti = |x: f64| x.powi(4) / 4.0 + x.powi(3) / 3.0 + x * x / 2.0 + x;
        let area = gauss_legendre(f, -3.0, 4.0);
        assert_relative_eq!(area, anti(4.0) - anti(-3.0), epsilon = 1.0e-10);
    }

    #[test]
    fn exact_for_high_degree_polynomial() {
        // Degree 47 is the highest degree the 24-point rule integrates exactly
        let f = |x: f64| x.powi(47) + x.powi(46);
        let anti = |x: f64| x.powi(48) / 48.0 + x.powi(47) / 47.0;
        let area = gauss_legendre(f, 0.0, 1.0);
        assert_relative_eq!(area, anti(1.0) - anti(0.0), epsilon = 1.0e-10);
    }

    #[test]
    fn smooth_transcendental_integrand() {
        let area = gauss_legendre(f64::sin, 0.0, std::f64::consts::PI);
        assert_relative_eq!(area, 2.0, epsilon = 1.0e-12);
    }

    #[test]
    fn reversed_interval_negates() {
        let mut rnd = rand::rng();
        for _ in 0..100 {
            let a = rnd.random_range(-10.0..10.0);
            let b = rnd.random_range(-10.0..10.0);
            let fwd = gauss_legendre(|x| x.exp(), a, b);
            let rev = gauss_legendre(|x| x.exp(), b, a);
            assert_relative_eq!(fwd, -rev, epsilon = 1.0e-9, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn zero_width_interval() {
        assert_eq!(gauss_legendre(|x| x * x + 1.0, 2.0, 2.0), 0.0);
    }
}
